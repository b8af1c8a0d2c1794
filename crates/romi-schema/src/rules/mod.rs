pub mod contact;
pub mod identity;
pub mod measurements;
pub mod symptoms;
