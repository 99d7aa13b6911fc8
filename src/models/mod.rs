// Domain models: server wire payloads in, dashboard shapes out

mod chart;
mod file_change;
mod sensor;
mod thumbnail;

pub use chart::{ChartEntry, ChartPoint, ChartSeries};
pub use file_change::{ChangeInfo, ChangeNotification, ChangeTarget, FileAction, ItemRef};
pub use sensor::{SensorConfig, SensorReadingUpdate};
pub use thumbnail::{FileMetadata, Thumbnail};
