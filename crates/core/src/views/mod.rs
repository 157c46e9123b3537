pub mod gantt;
pub mod time_axis;

pub use gantt::render_gantt;
pub use time_axis::x_ticks;
