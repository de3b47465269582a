pub mod compare;
pub mod grib2png;
pub mod grib_inspect;
pub mod nc2png;
pub mod nc_inspect;
pub mod reorganize;
