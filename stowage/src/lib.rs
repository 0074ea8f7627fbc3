pub mod conveyor;
pub mod entities;
pub mod errors;
pub mod io;
pub mod registry;
pub mod truck;
pub mod util;
pub mod warehouse;
