// Domain layer: models, the fixed sign table, and ports (interfaces).

pub mod model;
pub mod ports;
pub mod zodiac;
