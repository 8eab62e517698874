//! 两个 Provider 响应的合并
//!
//! 左优先、补空位的浅合并：以主记录为底，次记录只填补主记录缺失或为空的顶层字段。
//! 嵌套对象整体覆盖，不做逐字段递归合并。

use serde_json::{Map, Value};
use strum::{EnumIter, IntoEnumIterator};

use super::geoip::ProviderRecord;

/// 判断值是否为“空”：null、false、0、空字符串、空数组、空对象
pub fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

/// 合并主、次 Provider 的记录
pub fn merge(primary: &ProviderRecord, secondary: &ProviderRecord) -> UnifiedRecord {
    let mut fields = primary.fields().clone();

    for (key, value) in secondary.fields() {
        let keep_existing = fields.get(key).is_some_and(|existing| !is_falsy(existing));
        if !keep_existing {
            fields.insert(key.clone(), value.clone());
        }
    }

    UnifiedRecord { fields }
}

/// 规范字段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Field {
    Ip,
    Continent,
    Country,
    Region,
    RegionCode,
    City,
    Zipcode,
    Latitude,
    Longitude,
    Organization,
    IsEu,
}

type Path = &'static [&'static str];

impl Field {
    pub fn key(&self) -> &'static str {
        match self {
            Field::Ip => "ip",
            Field::Continent => "continent",
            Field::Country => "country",
            Field::Region => "region",
            Field::RegionCode => "region_code",
            Field::City => "city",
            Field::Zipcode => "zipcode",
            Field::Latitude => "latitude",
            Field::Longitude => "longitude",
            Field::Organization => "organization",
            Field::IsEu => "is_eu",
        }
    }

    /// 主 Provider 中的位置，按顺序尝试
    fn primary_paths(&self) -> &'static [Path] {
        match self {
            Field::Ip => &[&["ip"]],
            Field::Continent => &[&["location", "continent_name"], &["location", "continent"]],
            Field::Country => &[&["location", "country_name"], &["location", "country"]],
            Field::Region => &[&["location", "state_prov"], &["location", "region"]],
            Field::RegionCode => &[&["location", "state_code"], &["location", "region_code"]],
            Field::City => &[&["location", "city"]],
            Field::Zipcode => &[&["location", "zipcode"]],
            Field::Latitude => &[&["location", "latitude"]],
            Field::Longitude => &[&["location", "longitude"]],
            Field::Organization => &[&["network", "asn", "organization"]],
            Field::IsEu => &[&["location", "is_eu"]],
        }
    }

    /// 次 Provider 中的位置
    fn secondary_paths(&self) -> &'static [Path] {
        match self {
            Field::Ip => &[&["query"]],
            Field::Continent => &[&["continent"]],
            Field::Country => &[&["country"]],
            Field::Region => &[&["regionName"]],
            Field::RegionCode => &[&["region"]],
            Field::City => &[&["city"]],
            Field::Zipcode => &[&["zip"]],
            Field::Latitude => &[&["lat"]],
            Field::Longitude => &[&["lon"]],
            Field::Organization => &[&["isp"], &["org"]],
            Field::IsEu => &[],
        }
    }
}

/// 同一字段来自两个 Provider 的值
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldValues {
    /// 主 Provider 的值
    pub preferred: Option<String>,
    /// 次 Provider 的值
    pub fallback: Option<String>,
}

impl FieldValues {
    /// 主值非空取主值，否则取次值
    pub fn resolved(&self) -> Option<&str> {
        self.preferred.as_deref().or(self.fallback.as_deref())
    }
}

/// 合并后的记录
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UnifiedRecord {
    fields: Map<String, Value>,
}

impl UnifiedRecord {
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// 原始顶层字段
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn raw(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn field(&self, field: Field) -> FieldValues {
        FieldValues {
            preferred: self.first_text(field.primary_paths()),
            fallback: self.first_text(field.secondary_paths()),
        }
    }

    pub fn resolved(&self, field: Field) -> Option<String> {
        self.field(field).resolved().map(String::from)
    }

    /// 是否欧盟国家，缺失时为 None
    pub fn is_eu(&self) -> Option<bool> {
        Field::IsEu
            .primary_paths()
            .iter()
            .find_map(|path| self.lookup(path))
            .and_then(Value::as_bool)
    }

    /// 经纬度都能解析出非空值时返回
    pub fn coordinates(&self) -> Option<(String, String)> {
        let lat = self.resolved(Field::Latitude)?;
        let lon = self.resolved(Field::Longitude)?;
        Some((lat, lon))
    }

    /// 所有规范字段的 (字段, 值) 列表
    pub fn canonical_fields(&self) -> Vec<(Field, FieldValues)> {
        Field::iter().map(|f| (f, self.field(f))).collect()
    }

    fn lookup(&self, path: &[&str]) -> Option<&Value> {
        let (first, rest) = path.split_first()?;
        rest.iter()
            .try_fold(self.fields.get(*first)?, |value, key| value.get(*key))
    }

    fn first_text(&self, paths: &[Path]) -> Option<String> {
        paths
            .iter()
            .find_map(|path| self.lookup(path).and_then(value_to_text))
    }
}

/// 标量转为展示文本，空值返回 None
fn value_to_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => {
            let s = s.trim();
            if s.is_empty() { None } else { Some(s.to_string()) }
        }
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
