//! Static en/fa translation catalog.
//!
//! Every user-visible string lives here so a language switch re-renders the
//! whole surface, including views injected after the initial page load.

/// Supported display languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lang {
    #[default]
    En,
    Fa,
}

impl Lang {
    /// Parse a persisted language code. Anything unrecognized (including a
    /// corrupted stored value) falls back to English.
    pub fn from_code(code: &str) -> Self {
        match code {
            "fa" => Lang::Fa,
            _ => Lang::En,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Fa => "fa",
        }
    }

    /// Document text direction for this language.
    pub fn dir(self) -> &'static str {
        match self {
            Lang::En => "ltr",
            Lang::Fa => "rtl",
        }
    }
}

/// Translation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Text {
    Title,
    ContentLabel,
    ContentPlaceholder,
    ContentHint,
    PasswordLabel,
    ExpireLabel,
    Expire10m,
    Expire30m,
    Expire1h,
    Expire2h,
    Expire3h,
    Expire1d,
    OneTimeView,
    OneTimePassword,
    CreateBtn,
    YourLink,
    Copy,
    Copied,
    CopyAll,
    CopyManual,
    CreateAnother,
    Footer,
    ErrorRequired,
    ErrorNetwork,
    ErrorGeneric,
    UnlockTitle,
    UnlockDesc,
    UnlockBtn,
    UnlockNetwork,
    WrongPassword,
    PasswordPlaceholder,
    BackHome,
}

/// Look up a string in the catalog.
pub fn tr(lang: Lang, text: Text) -> &'static str {
    match lang {
        Lang::En => match text {
            Text::Title => "ShredLink",
            Text::ContentLabel => "Content",
            Text::ContentPlaceholder => "Paste or type the text you want to share securely…",
            Text::ContentHint => "Optional: protect with a password. Leave empty for a public link.",
            Text::PasswordLabel => "Password (optional)",
            Text::ExpireLabel => "Expire after",
            Text::Expire10m => "10 minutes",
            Text::Expire30m => "30 minutes",
            Text::Expire1h => "1 hour",
            Text::Expire2h => "2 hours",
            Text::Expire3h => "3 hours",
            Text::Expire1d => "1 day",
            Text::OneTimeView => "One-time view (link invalid after first open)",
            Text::OneTimePassword => "One-time password (expires after correct password once)",
            Text::CreateBtn => "Create link",
            Text::YourLink => "Your secure link:",
            Text::Copy => "Copy",
            Text::Copied => "Copied!",
            Text::CopyAll => "Copy all",
            Text::CopyManual => "Select and copy manually",
            Text::CreateAnother => "Create another link",
            Text::Footer => {
                "Content is encrypted and can be set to expire or become invalid after one view."
            }
            Text::ErrorRequired => "Please enter some text.",
            Text::ErrorNetwork => "Network error. Check your connection and try again.",
            Text::ErrorGeneric => "Failed to create link. Try again.",
            Text::UnlockTitle => "This link is protected",
            Text::UnlockDesc => "Enter the password to view the content.",
            Text::UnlockBtn => "Unlock",
            Text::UnlockNetwork => "Network error",
            Text::WrongPassword => "Wrong password",
            Text::PasswordPlaceholder => "Password",
            Text::BackHome => "Back home",
        },
        Lang::Fa => match text {
            Text::Title => "ShredLink",
            Text::ContentLabel => "محتوا",
            Text::ContentPlaceholder => "متن را اینجا بچسبانید یا تایپ کنید…",
            Text::ContentHint => "اختیاری: با رمز عبور محافظت کنید. برای لینک عمومی خالی بگذارید.",
            Text::PasswordLabel => "رمز عبور (اختیاری)",
            Text::ExpireLabel => "انقضا پس از",
            Text::Expire10m => "۱۰ دقیقه",
            Text::Expire30m => "۳۰ دقیقه",
            Text::Expire1h => "۱ ساعت",
            Text::Expire2h => "۲ ساعت",
            Text::Expire3h => "۳ ساعت",
            Text::Expire1d => "۱ روز",
            Text::OneTimeView => "یک‌بار مشاهده (لینک بعد از اولین باز شدن غیرفعال می‌شود)",
            Text::OneTimePassword => {
                "یک‌بار رمز (بعد از یک بار وارد کردن صحیح رمز، لینک منقضی می‌شود)"
            }
            Text::CreateBtn => "ساخت لینک",
            Text::YourLink => "لینک امن شما:",
            Text::Copy => "کپی",
            Text::Copied => "کپی شد!",
            Text::CopyAll => "کپی همه",
            Text::CopyManual => "انتخاب و کپی دستی",
            Text::CreateAnother => "ساخت لینک دیگر",
            Text::Footer => "محتوا رمزنگاری شده و قابل انقضا یا یک‌بار مصرف است.",
            Text::ErrorRequired => "لطفاً متنی وارد کنید.",
            Text::ErrorNetwork => "خطای شبکه. اتصال را بررسی کنید.",
            Text::ErrorGeneric => "ساخت لینک ناموفق بود. دوباره تلاش کنید.",
            Text::UnlockTitle => "این لینک محافظت شده است",
            Text::UnlockDesc => "رمز عبور را برای مشاهده محتوا وارد کنید.",
            Text::UnlockBtn => "باز کردن",
            Text::UnlockNetwork => "خطای شبکه",
            Text::WrongPassword => "رمز اشتباه",
            Text::PasswordPlaceholder => "رمز عبور",
            Text::BackHome => "بازگشت به خانه",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_code_defaults_to_english() {
        assert_eq!(Lang::from_code("en"), Lang::En);
        assert_eq!(Lang::from_code("fa"), Lang::Fa);
        assert_eq!(Lang::from_code(""), Lang::En);
        assert_eq!(Lang::from_code("de"), Lang::En);
        assert_eq!(Lang::from_code("garbage"), Lang::En);
    }

    #[test]
    fn test_direction() {
        assert_eq!(Lang::En.dir(), "ltr");
        assert_eq!(Lang::Fa.dir(), "rtl");
    }

    #[test]
    fn test_catalog_has_both_languages() {
        assert_eq!(tr(Lang::En, Text::WrongPassword), "Wrong password");
        assert_eq!(tr(Lang::Fa, Text::WrongPassword), "رمز اشتباه");
        assert_ne!(tr(Lang::En, Text::CreateBtn), tr(Lang::Fa, Text::CreateBtn));
    }
}
