pub mod test_distinguishing;
