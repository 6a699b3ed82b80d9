/*!
The abstract elements of a structure: [nodes](node), [facts](triplet), and the
[constraint](term) vocabulary the solver is given.
*/

pub mod node;
pub mod term;
pub mod triplet;
