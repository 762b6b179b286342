pub mod constants;
pub mod scope;
pub mod url;
