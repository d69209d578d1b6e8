//! YAML representation of a [`RandomConfig`](super::RandomConfig).

use super::RandomConfigBuilder;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use fixture_core::{PoolBuilder, PoolSpec, PoolValue};
use serde::{Deserialize, Serialize};

/// Config file contents: an optional [`PoolSpec`] per domain.
///
/// Keys match [`Domain::as_str`](fixture_core::Domain::as_str).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RandomConfigFile {
    pub string_length: Option<PoolSpec<usize>>,
    pub character: Option<PoolSpec<char>>,
    pub integer: Option<PoolSpec<i32>>,
    pub long: Option<PoolSpec<i64>>,
    pub float: Option<PoolSpec<f32>>,
    pub double: Option<PoolSpec<f64>>,
    pub boolean: Option<PoolSpec<bool>>,
    pub time: Option<PoolSpec<NaiveTime>>,
    pub date: Option<PoolSpec<NaiveDate>>,
    pub date_time: Option<PoolSpec<NaiveDateTime>>,
    pub instant: Option<PoolSpec<DateTime<Utc>>>,
    pub zoned_date_time: Option<PoolSpec<DateTime<FixedOffset>>>,
}

fn apply<T: PoolValue>(spec: Option<PoolSpec<T>>) -> impl FnOnce(&mut PoolBuilder<T>) {
    move |builder: &mut PoolBuilder<T>| {
        if let Some(spec) = spec {
            builder.apply(spec);
        }
    }
}

impl RandomConfigFile {
    pub fn into_builder(self) -> RandomConfigBuilder {
        let mut builder = RandomConfigBuilder::default();
        builder
            .string_length(apply(self.string_length))
            .character(apply(self.character))
            .integer(apply(self.integer))
            .long(apply(self.long))
            .float(apply(self.float))
            .double(apply(self.double))
            .boolean(apply(self.boolean))
            .time(apply(self.time))
            .date(apply(self.date))
            .date_time(apply(self.date_time))
            .instant(apply(self.instant))
            .zoned_date_time(apply(self.zoned_date_time));
        builder
    }
}
