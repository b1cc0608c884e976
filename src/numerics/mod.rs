pub mod least_squares;
