use std::fmt::Write;

use serde::Serialize;

use super::locale::{LocaleTable, table};
use crate::errors::Result;
use crate::services::geoip::ProviderRecord;
use crate::services::merge::{Field, FieldValues, UnifiedRecord};
use crate::structs::Locale;

/// 地图链接模板
pub const MAP_URL_TEMPLATE: &str = "https://www.google.com/maps?q={lat},{lon}";

pub fn map_url(lat: &str, lon: &str) -> String {
    MAP_URL_TEMPLATE.replace("{lat}", lat).replace("{lon}", lon)
}

/// 将合并记录渲染为当前语言的文本
///
/// 空记录只输出一行“无数据”。双来源字段以 `主 / 次` 并排展示，
/// 方便人工比对两个 Provider 的差异。
pub fn render(record: &UnifiedRecord, locale: Locale) -> String {
    let t = table(locale);
    let mut out = String::new();

    if record.is_empty() {
        let _ = writeln!(out, "{}", t.no_data);
        return out;
    }

    let single = |field: Field| -> String {
        record
            .resolved(field)
            .unwrap_or_else(|| t.unknown.to_string())
    };

    let _ = writeln!(out, "{}", t.heading);
    let _ = writeln!(out, "{}: {}", t.ip, single(Field::Ip));
    let _ = writeln!(out, "{}: {}", t.continent, single(Field::Continent));
    let _ = writeln!(out, "{}: {}", t.country, dual(t, &record.field(Field::Country)));
    let _ = writeln!(out, "{}: {}", t.region, dual(t, &record.field(Field::Region)));
    let _ = writeln!(out, "{}: {}", t.city, dual(t, &record.field(Field::City)));
    let _ = writeln!(out, "{}: {}", t.zipcode, single(Field::Zipcode));

    let lat = record.field(Field::Latitude);
    let lon = record.field(Field::Longitude);
    let _ = writeln!(
        out,
        "{}: {}, {} / {}, {}",
        t.lat_lon,
        or_unknown(t, &lat.preferred),
        or_unknown(t, &lon.preferred),
        or_unknown(t, &lat.fallback),
        or_unknown(t, &lon.fallback),
    );

    let _ = writeln!(
        out,
        "{}: {}",
        t.organization,
        dual(t, &record.field(Field::Organization))
    );
    let eu = if record.is_eu() == Some(true) { t.yes } else { t.no };
    let _ = writeln!(out, "{}: {}", t.is_eu, eu);

    if let Some((lat, lon)) = record.coordinates() {
        let _ = writeln!(out, "{}: {}", t.map, map_url(&lat, &lon));
    }

    out
}

fn or_unknown<'a>(t: &'a LocaleTable, value: &'a Option<String>) -> &'a str {
    value.as_deref().unwrap_or(t.unknown)
}

fn dual(t: &LocaleTable, values: &FieldValues) -> String {
    format!(
        "{} / {}",
        or_unknown(t, &values.preferred),
        or_unknown(t, &values.fallback)
    )
}

/// 本机国家信息
pub fn render_local_country(record: &ProviderRecord, locale: Locale) -> String {
    let t = table(locale);
    let country = record
        .get("location")
        .and_then(|l| l.get("country_name"))
        .and_then(|c| c.as_str())
        .filter(|c| !c.is_empty());

    match country {
        Some(country) => format!("{}: {}\n", t.local_country, country),
        None if record.is_empty() => format!("{}\n", t.local_unavailable),
        None => format!("{}: {}\n", t.local_country, t.unknown),
    }
}

#[derive(Debug, Serialize)]
struct JsonField {
    resolved: Option<String>,
    primary: Option<String>,
    secondary: Option<String>,
}

#[derive(Debug, Serialize)]
struct JsonLookup<'a> {
    query: &'a str,
    found: bool,
    fields: serde_json::Map<String, serde_json::Value>,
    is_eu: Option<bool>,
    map_url: Option<String>,
}

/// JSON 输出（每个地址一个对象，单行）
pub fn render_json(query: &str, record: &UnifiedRecord) -> Result<String> {
    let mut fields = serde_json::Map::new();
    if !record.is_empty() {
        for (field, values) in record.canonical_fields() {
            if field == Field::IsEu {
                continue;
            }
            let entry = JsonField {
                resolved: values.resolved().map(String::from),
                primary: values.preferred,
                secondary: values.fallback,
            };
            fields.insert(field.key().to_string(), serde_json::to_value(entry)?);
        }
    }

    let lookup = JsonLookup {
        query,
        found: !record.is_empty(),
        fields,
        is_eu: record.is_eu(),
        map_url: record.coordinates().map(|(lat, lon)| map_url(&lat, &lon)),
    };
    Ok(format!("{}\n", serde_json::to_string(&lookup)?))
}
