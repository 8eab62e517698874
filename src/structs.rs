use strum::{AsRefStr, EnumIter};

/// 输出语言
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumIter, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Cn,
    Ja,
    Es,
    De,
}

impl Locale {
    /// 命令行数字选择器（1-5）对应的语言，无法识别时回退到英文
    pub fn from_selector(selector: &str) -> Self {
        match selector.trim() {
            "1" => Locale::En,
            "2" => Locale::Cn,
            "3" => Locale::Ja,
            "4" => Locale::Es,
            "5" => Locale::De,
            _ => Locale::En,
        }
    }

    pub fn selector(&self) -> &'static str {
        match self {
            Locale::En => "1",
            Locale::Cn => "2",
            Locale::Ja => "3",
            Locale::Es => "4",
            Locale::De => "5",
        }
    }

    /// 语言代码（en / cn / ja / es / de）
    pub fn code(&self) -> &str {
        self.as_ref()
    }

    /// 主 Provider 的 `lang` 参数
    ///
    /// ipgeolocation.io 使用 `zh` 表示中文。
    pub fn api_lang(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Cn => "zh",
            Locale::Ja => "ja",
            Locale::Es => "es",
            Locale::De => "de",
        }
    }
}

/// 查询结果的输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
