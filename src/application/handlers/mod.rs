//! Command and query handlers.

pub mod session;

pub use session::{
    CheckAttendanceByStudentIdHandler, CheckAttendanceByStudentIdQuery, CheckAttendanceHandler,
    DisableSessionHandler, DisableSessionResult, EnableSessionHandler, EnableSessionResult,
    GiveAttendanceCommand, GiveAttendanceHandler, GiveAttendanceResult, OpenSessionCommand,
    OpenSessionHandler, OpenSessionResult, TotalAttendanceHandler,
};
