pub const SITE_NAME: &str = "Masjid Al-Falah";
pub const SITE_SHORT_NAME: &str = "Al-Falah";

pub const CONTACT_ADDRESS: [&str; 4] = [
    "Masjid Al-Falah",
    "Jalan Masjid 1/2,",
    "Taman Harmoni,",
    "40000 Shah Alam, Selangor",
];
pub const CONTACT_PHONE: &str = "03-5544 1234";
pub const CONTACT_PHONE_HREF: &str = "tel:+60355441234";
pub const CONTACT_EMAIL: &str = "info@masjidalfalah.my";
pub const FACEBOOK_URL: &str = "https://facebook.com/masjidalfalah";
pub const INSTAGRAM_URL: &str = "https://instagram.com/masjidalfalah";

/// Office hours as `(days, hours)`.
pub const OFFICE_HOURS: [(&str, &str); 3] = [
    ("Isnin - Khamis", "9:00 AM - 5:00 PM"),
    ("Jumaat", "9:00 AM - 12:00 PM"),
    ("Sabtu - Ahad", "Tutup"),
];

/// Frequently asked questions as `(question, answer)`.
pub const FAQ: [(&str, &str); 3] = [
    (
        "Adakah masjid menerima zakat dan sedekah?",
        "Ya, kami menerima zakat, sedekah, dan derma. Sila hubungi pejabat untuk maklumat lanjut.",
    ),
    (
        "Bagaimana untuk menjadi ahli kariah?",
        "Sila hubungi pejabat atau datang terus semasa waktu operasi untuk pendaftaran.",
    ),
    (
        "Adakah terdapat kemudahan untuk OKU?",
        "Ya, masjid kami dilengkapi dengan kemudahan untuk OKU termasuk ram dan tandas khas.",
    ),
];

/// Mosque-local UTC offset in hours, used for "today" in forms.
pub const LOCAL_UTC_OFFSET_HOURS: i32 = 8;
