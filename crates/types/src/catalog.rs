//! Static content shown on the landing page: sections, internet packages and
//! customer testimonials.

use serde::{Deserialize, Serialize};

/// Anchored sections of the landing page, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Section {
    Home,
    Packages,
    Testimonials,
    Billing,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::Packages,
        Section::Testimonials,
        Section::Billing,
        Section::Contact,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Section::Home => "Beranda",
            Section::Packages => "Paket",
            Section::Testimonials => "Testimoni",
            Section::Billing => "Bayar Tagihan",
            Section::Contact => "Kontak",
        }
    }

    /// Anchor id used by in-page links (`#paket`).
    pub const fn anchor(self) -> &'static str {
        match self {
            Section::Home => "beranda",
            Section::Packages => "paket",
            Section::Testimonials => "testimoni",
            Section::Billing => "pembayaran",
            Section::Contact => "kontak",
        }
    }

    pub fn from_anchor(anchor: &str) -> Option<Self> {
        let anchor = anchor.trim().trim_start_matches('#');
        Self::ALL.into_iter().find(|section| section.anchor() == anchor)
    }
}

/// A subscription package offered on the landing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InternetPackage {
    /// Identifier used by forms (`15mbps`).
    pub id: &'static str,
    pub name: &'static str,
    pub speed: &'static str,
    pub price: &'static str,
    /// Marked as the most popular choice.
    pub featured: bool,
}

impl InternetPackage {
    /// Label used in the contact form package dropdown.
    pub fn contact_label(&self) -> String {
        let label = format!("{} - {}", self.name, self.price);
        if self.featured { format!("{label} (Terpopuler)") } else { label }
    }
}

pub const PACKAGES: &[InternetPackage] = &[
    InternetPackage {
        id: "15mbps",
        name: "Paket 15 Mbps",
        speed: "15 Mbps",
        price: "Rp 150.000",
        featured: false,
    },
    InternetPackage {
        id: "20mbps",
        name: "Paket 20 Mbps",
        speed: "20 Mbps",
        price: "Rp 200.000",
        featured: true,
    },
    InternetPackage {
        id: "30mbps",
        name: "Paket 30 Mbps",
        speed: "30 Mbps",
        price: "Rp 250.000",
        featured: false,
    },
];

pub fn find_package(id: &str) -> Option<&'static InternetPackage> {
    PACKAGES.iter().find(|package| package.id == id)
}

/// A customer quote shown in the testimonial carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Testimonial {
    pub name: &'static str,
    pub location: &'static str,
    pub quote: &'static str,
    /// Star rating, 1 to 5.
    pub rating: u8,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Budi Santoso",
        location: "Denpasar",
        quote: "Koneksi stabil untuk kerja dari rumah, video call tidak pernah putus.",
        rating: 5,
    },
    Testimonial {
        name: "Siti Nurhaliza",
        location: "Badung",
        quote: "Pemasangan cepat, teknisinya ramah dan rapi.",
        rating: 5,
    },
    Testimonial {
        name: "Ahmad Rahman",
        location: "Gianyar",
        quote: "Harga terjangkau dan kecepatan sesuai paket.",
        rating: 4,
    },
    Testimonial {
        name: "Made Wirawan",
        location: "Tabanan",
        quote: "Streaming dan game online lancar tanpa lag.",
        rating: 5,
    },
    Testimonial {
        name: "Dewi Lestari",
        location: "Ubud",
        quote: "Layanan pelanggan responsif lewat WhatsApp, masalah selesai hari itu juga.",
        rating: 5,
    },
    Testimonial {
        name: "Komang Ayu",
        location: "Kuta",
        quote: "Sudah setahun berlangganan dan jarang sekali gangguan.",
        rating: 4,
    },
];

/// Preferred slot for the installation visit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InstallationWindow {
    Morning,
    Midday,
    Afternoon,
    Flexible,
}

impl InstallationWindow {
    pub const ALL: [InstallationWindow; 4] = [
        InstallationWindow::Morning,
        InstallationWindow::Midday,
        InstallationWindow::Afternoon,
        InstallationWindow::Flexible,
    ];

    pub const fn id(self) -> &'static str {
        match self {
            InstallationWindow::Morning => "pagi",
            InstallationWindow::Midday => "siang",
            InstallationWindow::Afternoon => "sore",
            InstallationWindow::Flexible => "fleksibel",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            InstallationWindow::Morning => "Pagi (08:00 - 12:00)",
            InstallationWindow::Midday => "Siang (12:00 - 16:00)",
            InstallationWindow::Afternoon => "Sore (16:00 - 18:00)",
            InstallationWindow::Flexible => "Fleksibel (sesuai jadwal teknisi)",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn featured_package_is_flagged_in_contact_label() {
        let popular = find_package("20mbps").unwrap();
        assert_eq!(popular.contact_label(), "Paket 20 Mbps - Rp 200.000 (Terpopuler)");
        assert_eq!(find_package("15mbps").unwrap().contact_label(), "Paket 15 Mbps - Rp 150.000");
        assert!(find_package("100mbps").is_none());
    }

    #[test]
    fn testimonial_ratings_are_in_range() {
        assert!(!TESTIMONIALS.is_empty());
        assert!(TESTIMONIALS.iter().all(|t| (1..=5).contains(&t.rating)));
    }

    #[test]
    fn anchors_resolve_with_or_without_hash() {
        assert_eq!(Section::from_anchor("#kontak"), Some(Section::Contact));
        assert_eq!(Section::from_anchor("paket"), Some(Section::Packages));
        assert_eq!(Section::from_anchor("#faq"), None);
    }
}
