pub(crate) mod common;

mod pro;
mod routing;
