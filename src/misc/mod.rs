/*!
Miscellaneous items which do not belong to a single subsystem.
*/

pub mod log;
