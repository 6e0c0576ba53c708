use chrono::{DateTime, Duration, FixedOffset, NaiveDateTime, SecondsFormat, Utc};
use tracing::info;

/// 调用方提交的本地时间固定为东八区（北京时间）
const LOCAL_OFFSET_SECS: i32 = 8 * 3600;

/// 本地时区的固定偏移
pub fn local_offset() -> FixedOffset {
    FixedOffset::east_opt(LOCAL_OFFSET_SECS).expect("UTC+8 is a valid fixed offset")
}

/// 查询时间窗口，start/end 均为 UTC 时刻
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeWindow {
    /// 单次查询允许的最大时间跨度
    pub const MAX_SPAN_HOURS: i64 = 24;

    /// 按决策表解析请求的时间范围，每个请求恰好命中一条规则：
    ///
    /// 1. 同时提供 start/end：各自转换为 UTC（失败侧独立回退到
    ///    now−24h / now），超过 24 小时时以 end 为基准收缩 start；
    /// 2. 仅提供 start：end 取当前时间，收缩规则同上；
    /// 3. 仅提供 end：start 无条件取 end−24h；
    /// 4. 均未提供但指定了日志类型：最近 10 分钟；
    /// 5. 均未提供且未指定类型：最近 24 小时。
    pub fn resolve(
        start: Option<&str>,
        end: Option<&str>,
        has_type: bool,
        now: DateTime<Utc>,
    ) -> Self {
        let max_span = Duration::hours(Self::MAX_SPAN_HOURS);

        match (start, end) {
            (Some(s), Some(e)) => {
                let end = parse_local(e).unwrap_or(now);
                let start = parse_local(s).unwrap_or(now - max_span);
                Self { start, end }.capped()
            }
            (Some(s), None) => {
                let start = parse_local(s).unwrap_or(now - max_span);
                Self { start, end: now }.capped()
            }
            (None, Some(e)) => {
                let end = parse_local(e).unwrap_or(now);
                Self {
                    start: end - max_span,
                    end,
                }
            }
            (None, None) => {
                if has_type {
                    info!("指定了日志类型但未提供时间范围，默认查询最近10分钟");
                    Self {
                        start: now - Duration::minutes(10),
                        end: now,
                    }
                } else {
                    info!("未提供时间范围，默认查询最近24小时");
                    Self {
                        start: now - max_span,
                        end: now,
                    }
                }
            }
        }
    }

    /// 超过 24 小时的窗口收缩为以 end 为基准的 24 小时，end 保持不变
    fn capped(self) -> Self {
        let max_span = Duration::hours(Self::MAX_SPAN_HOURS);
        if self.end - self.start > max_span {
            info!("时间范围超过24小时，已限制为最大24小时");
            Self {
                start: self.end - max_span,
                end: self.end,
            }
        } else {
            self
        }
    }

    /// 中文时长描述，如 `1小时`、`2小时15分钟`、`10分钟`
    pub fn describe_duration(&self) -> String {
        let total_minutes = (self.end - self.start).num_minutes();
        let hours = total_minutes / 60;
        let minutes = total_minutes % 60;

        if hours >= 1 {
            if minutes > 0 {
                format!("{}小时{}分钟", hours, minutes)
            } else {
                format!("{}小时", hours)
            }
        } else {
            format!("{}分钟", minutes)
        }
    }
}

/// 解析东八区本地时间字符串为 UTC。
///
/// 接受 `2025-04-09T08:00:00`（可带小数秒）、`2025-04-09 08:00:00`，
/// 以及自带偏移的 RFC 3339 字符串；无法解析时返回 `None`，
/// 由调用方按决策表回退。
pub fn parse_local(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    const FORMATS: [&str; 3] = [
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S",
    ];

    for fmt in FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return naive
                .and_local_timezone(local_offset())
                .single()
                .map(|dt| dt.with_timezone(&Utc));
        }
    }

    None
}

/// UTC 时刻的 ISO 字符串（秒精度，`+00:00` 偏移）
pub fn format_utc(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Secs, false)
}

/// 东八区本地时间显示，`YYYY-MM-DD HH:mm:ss`
pub fn format_local(ts: DateTime<Utc>) -> String {
    ts.with_timezone(&local_offset())
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}
