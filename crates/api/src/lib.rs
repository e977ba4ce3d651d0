pub mod dto;
pub mod error;
pub mod http;
pub mod mapper;
pub mod service;
pub mod validate;
