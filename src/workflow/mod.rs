pub mod compose;
pub mod notify;
pub mod scan;

#[cfg(test)]
mod testing;
