//! User-facing texts returned in response envelopes.

pub const SERVICE_NAME: &str = "naebak-news-service";

pub const INVALID_BODY: &str = "بيانات الطلب غير صالحة";
pub const NEWS_NOT_FOUND: &str = "الخبر غير موجود";
pub const CONTENT_REQUIRED: &str = "المحتوى مطلوب";
pub const CONTENT_EMPTY: &str = "لا يمكن أن يكون المحتوى فارغاً";
pub const COLOR_REQUIRED: &str = "يجب تحديد لون واحد على الأقل";

pub const NEWS_CREATED: &str = "تم إضافة الخبر بنجاح";
pub const NEWS_UPDATED: &str = "تم تحديث الخبر بنجاح";
pub const NEWS_DELETED: &str = "تم حذف الخبر بنجاح";
pub const NEWS_ARCHIVED: &str = "تم أرشفة الخبر بنجاح";
pub const NEWS_UNARCHIVED: &str = "تم إلغاء أرشفة الخبر بنجاح";
pub const COLORS_UPDATED: &str = "تم تحديث الألوان بنجاح";

/// The mutation a request was performing; picks the error texts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    GetNews,
    CreateNews,
    UpdateNews,
    DeleteNews,
    ArchiveNews,
    UnarchiveNews,
    UpdateColors,
}

impl Op {
    pub fn validation_message(self) -> &'static str {
        match self {
            Op::CreateNews => CONTENT_REQUIRED,
            Op::UpdateNews => CONTENT_EMPTY,
            Op::UpdateColors => COLOR_REQUIRED,
            _ => INVALID_BODY,
        }
    }

    pub fn storage_message(self) -> &'static str {
        match self {
            Op::GetNews => "فشل في جلب الخبر",
            Op::CreateNews => "فشل في حفظ الخبر",
            Op::UpdateNews => "فشل في حفظ التحديث",
            Op::DeleteNews => "فشل في حذف الخبر",
            Op::ArchiveNews => "فشل في أرشفة الخبر",
            Op::UnarchiveNews => "فشل في إلغاء أرشفة الخبر",
            Op::UpdateColors => "فشل في حفظ الألوان",
        }
    }
}
