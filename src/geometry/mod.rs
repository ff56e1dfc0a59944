pub(crate) mod alignment;
