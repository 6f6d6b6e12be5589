pub mod carousel;
pub mod footprint;
pub mod quiz;
pub mod slider;
pub mod validator;
