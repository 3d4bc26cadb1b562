//! Session command and query handlers.
//!
//! One handler per operation, mirroring the operation table of the
//! session: open, enable, disable, give attendance, plus the three
//! read capabilities (self claim, owner audit by identifier, total).

mod check_attendance;
mod check_attendance_by_student_id;
mod disable_session;
mod enable_session;
mod give_attendance;
mod open_session;
mod total_attendance;

pub use check_attendance::CheckAttendanceHandler;
pub use check_attendance_by_student_id::{
    CheckAttendanceByStudentIdHandler, CheckAttendanceByStudentIdQuery,
};
pub use disable_session::{DisableSessionHandler, DisableSessionResult};
pub use enable_session::{EnableSessionHandler, EnableSessionResult};
pub use give_attendance::{GiveAttendanceCommand, GiveAttendanceHandler, GiveAttendanceResult};
pub use open_session::{OpenSessionCommand, OpenSessionHandler, OpenSessionResult};
pub use total_attendance::TotalAttendanceHandler;
