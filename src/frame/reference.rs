//! Published results for the reference frame

/// Periods (s) of modes 1-7 reported by SAP2000
pub const SAP2000_PERIODS: [f64; 7] = [1.2732, 0.4313, 0.2420, 0.1602, 0.1190, 0.0951, 0.0795];

/// Periods (s) of modes 1-7 reported by SeismoStruct
pub const SEISMOSTRUCT_PERIODS: [f64; 7] = [1.2732, 0.4313, 0.2420, 0.1602, 0.1190, 0.0951, 0.0795];

/// Allowed absolute period deviation
pub const PERIOD_TOLERANCE: f64 = 9.99e-5;

/// Static quantities in report order
pub const STATIC_LABELS: [&str; 3] = ["Disp Top", "Axial Force Bottom Left", "Moment Bottom Left"];

/// Top displacement, base axial force and base moment from SAP2000
pub const SAP2000_STATIC: [f64; 3] = [1.45076, 69.99, 2324.68];

/// Top displacement, base axial force and base moment from SeismoStruct
pub const SEISMOSTRUCT_STATIC: [f64; 3] = [1.451, 70.01, 2324.71];

/// Allowed absolute deviation per static quantity
pub const STATIC_TOLERANCES: [f64; 3] = [9.99e-6, 9.99e-3, 9.99e-3];
