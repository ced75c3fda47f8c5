pub(super) mod kit_controller;
pub(super) mod life_controller;
