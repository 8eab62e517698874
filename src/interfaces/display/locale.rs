//! 各语言的标签和占位符
//!
//! 新增语言只需要在这里加一行表项。

use crate::structs::Locale;

/// 单个语言的全部展示文本
#[derive(Debug)]
pub struct LocaleTable {
    pub heading: &'static str,
    pub ip: &'static str,
    pub continent: &'static str,
    pub country: &'static str,
    pub region: &'static str,
    pub city: &'static str,
    pub zipcode: &'static str,
    pub lat_lon: &'static str,
    pub organization: &'static str,
    pub is_eu: &'static str,
    pub map: &'static str,
    pub yes: &'static str,
    pub no: &'static str,
    /// 字段缺失时的占位文本
    pub unknown: &'static str,
    /// 记录为空时输出的唯一一行
    pub no_data: &'static str,
    pub local_country: &'static str,
    pub local_unavailable: &'static str,
}

static EN: LocaleTable = LocaleTable {
    heading: "🌍 Geolocation Information",
    ip: "IP Address",
    continent: "Continent",
    country: "Country",
    region: "State/Province",
    city: "City",
    zipcode: "Zip Code",
    lat_lon: "Latitude, Longitude",
    organization: "Organization",
    is_eu: "EU Member",
    map: "Map",
    yes: "Yes",
    no: "No",
    unknown: "Unknown",
    no_data: "No geolocation information available.",
    local_country: "📍 Your IP belongs to",
    local_unavailable: "Unable to get local country information.",
};

static CN: LocaleTable = LocaleTable {
    heading: "🌍 地理位置信息（中文）",
    ip: "IP地址",
    continent: "大陆名称",
    country: "国家名称",
    region: "省份/州",
    city: "城市",
    zipcode: "邮编",
    lat_lon: "经纬度",
    organization: "组织",
    is_eu: "是否欧盟国家",
    map: "地图",
    yes: "是",
    no: "否",
    unknown: "未知",
    no_data: "没有可显示的地理信息。",
    local_country: "📍 你的 IP 所属国家是",
    local_unavailable: "无法获取本地国家信息。",
};

static JA: LocaleTable = LocaleTable {
    heading: "🌍 地理位置情報（日本語）",
    ip: "IPアドレス",
    continent: "大陸名",
    country: "国名",
    region: "都道府県",
    city: "都市",
    zipcode: "郵便番号",
    lat_lon: "緯度・経度",
    organization: "組織",
    is_eu: "EU加盟国",
    map: "地図",
    yes: "はい",
    no: "いいえ",
    unknown: "不明",
    no_data: "地理情報がありません。",
    local_country: "📍 あなたのIPの所属国",
    local_unavailable: "ローカルの国情報を取得できません。",
};

static ES: LocaleTable = LocaleTable {
    heading: "🌍 Información de Ubicación Geográfica (Español)",
    ip: "Dirección IP",
    continent: "Continente",
    country: "País",
    region: "Estado/Provincia",
    city: "Ciudad",
    zipcode: "Código Postal",
    lat_lon: "Latitud y Longitud",
    organization: "Organización",
    is_eu: "Miembro de la UE",
    map: "Mapa",
    yes: "Sí",
    no: "No",
    unknown: "Desconocido",
    no_data: "No hay información geográfica disponible.",
    local_country: "📍 País de su IP",
    local_unavailable: "No se pudo obtener el país local.",
};

static DE: LocaleTable = LocaleTable {
    heading: "🌍 Geografische Standortinformationen (Deutsch)",
    ip: "IP-Adresse",
    continent: "Kontinent",
    country: "Land",
    region: "Bundesland",
    city: "Stadt",
    zipcode: "Postleitzahl",
    lat_lon: "Breiten- und Längengrad",
    organization: "Organisation",
    is_eu: "EU-Mitglied",
    map: "Karte",
    yes: "Ja",
    no: "Nein",
    unknown: "Unbekannt",
    no_data: "Keine geografischen Informationen verfügbar.",
    local_country: "📍 Land Ihrer IP",
    local_unavailable: "Lokale Länderinformationen nicht verfügbar.",
};

pub fn table(locale: Locale) -> &'static LocaleTable {
    match locale {
        Locale::En => &EN,
        Locale::Cn => &CN,
        Locale::Ja => &JA,
        Locale::Es => &ES,
        Locale::De => &DE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_placeholders() {
        assert_eq!(table(Locale::En).unknown, "Unknown");
        assert_eq!(table(Locale::Cn).unknown, "未知");
        assert_eq!(table(Locale::Ja).unknown, "不明");
        assert_eq!(table(Locale::Es).unknown, "Desconocido");
        assert_eq!(table(Locale::De).unknown, "Unbekannt");
    }

    #[test]
    fn test_every_locale_has_distinct_no_data_line() {
        let lines: std::collections::HashSet<_> =
            Locale::iter().map(|l| table(l).no_data).collect();
        assert_eq!(lines.len(), Locale::iter().count());
    }
}
