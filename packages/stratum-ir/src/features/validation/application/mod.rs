pub mod validator;

pub use validator::ProgramValidator;
