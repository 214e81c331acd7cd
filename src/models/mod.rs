pub mod event;
pub mod filter;
pub mod health;
pub mod notification;
pub mod outcome;
pub mod response;
pub mod validation;
