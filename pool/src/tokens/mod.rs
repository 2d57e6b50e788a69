pub mod scaled;
pub mod stable;
