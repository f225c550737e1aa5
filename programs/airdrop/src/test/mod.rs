pub mod test_claim;
