pub mod asset;
pub mod bar;
pub mod bar_series;
pub mod date_range;
pub mod frame;
pub mod interval;
pub mod request_params;
pub mod symbol;
