pub(crate) mod admin;
pub(crate) mod form;
pub(crate) mod quiz;
pub(crate) mod status;
