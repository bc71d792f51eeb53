mod arith_tests;
mod others_tests;
