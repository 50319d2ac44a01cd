pub mod test_laws;
