mod arpabet;
mod buckeye;
mod errors;
mod reduction;
mod timit;
