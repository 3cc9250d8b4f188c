use chrono::DateTime;
use chrono::Local;

#[derive(Default)]
pub struct Clock;

#[mockall::automock]
impl Clock {
    pub fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}
