/// UI layer: egui panels and the fit plot.

pub mod panels;
pub mod plot;
