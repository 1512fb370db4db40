/*!
The types of dispatch, arranged by kind and then by the structure the dispatch is sent from.
*/

pub mod delta;
pub mod report;
