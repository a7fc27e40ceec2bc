pub mod leave_requests;
pub mod shifts;

#[cfg(test)]
pub(crate) mod testing;
