//! Static page content.
//!
//! Everything here is fixed at build time and never mutated. Components read
//! it directly; there is no loading step.

use crate::icons::IconName;

/// Brand name without the accented part.
pub const BRAND: &str = "Kavárna";
/// Accented part of the brand, rendered in gold.
pub const BRAND_ACCENT: &str = "U Kódu";

/// One entry in the site navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    /// In-page anchor, e.g. `#o-nas`
    pub href: &'static str,
    /// Visible text
    pub label: &'static str,
}

/// Navigation shown in both the desktop bar and the mobile overlay.
pub const NAV_ITEMS: [NavItem; 3] = [
    NavItem { href: "#o-nas", label: "O Nás" },
    NavItem { href: "#nabidka", label: "Nabídka" },
    NavItem { href: "#kontakt", label: "Kontakt" },
];

/// Section ids, targets of [`NAV_ITEMS`] (plus the hero).
pub mod anchors {
    /// Hero section
    pub const HERO: &str = "hero";
    /// "O Nás"
    pub const ABOUT: &str = "o-nas";
    /// "Nabídka"
    pub const OFFERINGS: &str = "nabidka";
    /// "Kontakt"
    pub const CONTACT: &str = "kontakt";
}

/// Hero copy. The headline is `TITLE_LEAD`, `TITLE_ACCENT` in gold, then a period.
pub mod hero {
    /// Plain part of the headline
    pub const TITLE_LEAD: &str = "Nejlepší káva pro vaše ";
    /// Gold part of the headline
    pub const TITLE_ACCENT: &str = "bugy";
    /// Paragraph under the headline
    pub const SUBTITLE: &str = "Útočiště pro developery a kreativce v srdci Prahy. \
        Nalaďte se na správnou vlnu s naší prémiovou kávou v inspirativním prostředí.";
    /// Button text
    pub const CTA_LABEL: &str = "Prozkoumat Nabídku";
    /// Button target, the offerings section
    pub const CTA_HREF: &str = "#nabidka";
}

/// "Příběh naší kavárny" copy.
pub mod about {
    /// Section heading
    pub const TITLE: &str = "Příběh naší kavárny";
    /// Single paragraph
    pub const BODY: &str = "Jsme moderní kavárna v srdci Prahy, stvořená jako klidné útočiště \
        pro práci i odpočinek. Věříme, že skvělá káva je základem každého úspěšného projektu, \
        a proto s vášní připravujeme každý šálek. Naším cílem je poskytnout vám nejen \
        prvotřídní nápoje, ale i nerušené prostředí, kde se rodí ty nejlepší nápady.";
}

/// Offerings section heading and intro.
pub mod offerings {
    /// Section heading
    pub const TITLE: &str = "Naše Speciality";
    /// Line under the heading
    pub const INTRO: &str =
        "Každý nápoj je pečlivě sestaven tak, aby nastartoval vaši produktivitu.";
}

/// Contact section heading and intro.
pub mod contact {
    /// Section heading
    pub const TITLE: &str = "Navštivte nás";
    /// Line under the heading
    pub const INTRO: &str =
        "Jsme tu pro vás každý všední den. Zastavte se na kávu nebo kus řeči.";
}

/// Footer text.
pub mod footer {
    /// Follows `© {year} `
    pub const RIGHTS: &str = "Kavárna U Kódu. Všechna práva vyhrazena.";
    /// Credit link text
    pub const CREDIT_LABEL: &str = "Vytvořeno s láskou od DigitalFusion";
    /// Credit link target, opened in a new tab
    pub const CREDIT_HREF: &str = "https://digitalfusion.cz";
}

/// A drink card in the offerings grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Specialty {
    /// Drink name, the card heading
    pub name: &'static str,
    /// One-sentence blurb
    pub description: &'static str,
}

/// The three drinks, in display order.
pub const SPECIALTIES: [Specialty; 3] = [
    Specialty {
        name: "Debuggovací Doppio",
        description: "Dvojitá dávka espressa pro intenzivní soustředění a rychlé řešení problémů.",
    },
    Specialty {
        name: "Algoritmické Americano",
        description: "Čistá a silná káva pro čisté a efektivní myšlení. Ideální pro dlouhé sezení.",
    },
    Specialty {
        name: "Frontend Flat White",
        description: "Dokonale vyvážená a sametově jemná káva pro pixel-perfect výsledky.",
    },
];

/// How a contact card shows its value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactValue {
    /// Plain text, one line per element
    Lines(&'static [&'static str]),
    /// A clickable link (`tel:`, `mailto:`)
    Link {
        /// Link target
        href: &'static str,
        /// Visible text
        label: &'static str,
    },
}

/// A card in the contact grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactEntry {
    /// Icon above the title
    pub icon: IconName,
    /// Card heading
    pub title: &'static str,
    /// Card body
    pub value: ContactValue,
}

/// Address, phone and email, in display order.
pub const CONTACTS: [ContactEntry; 3] = [
    ContactEntry {
        icon: IconName::MapPin,
        title: "Adresa",
        value: ContactValue::Lines(&["Bugfixová 1", "110 00 Praha 1"]),
    },
    ContactEntry {
        icon: IconName::Phone,
        title: "Telefon",
        value: ContactValue::Link {
            href: "tel:+420777123456",
            label: "+420 777 123 456",
        },
    },
    ContactEntry {
        icon: IconName::Mail,
        title: "Email",
        value: ContactValue::Link {
            href: "mailto:test@kavarna.cz",
            label: "test@kavarna.cz",
        },
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn nav_items_are_fixed_and_ordered() {
        let pairs: Vec<_> = NAV_ITEMS.iter().map(|i| (i.href, i.label)).collect();
        assert_eq!(
            pairs,
            vec![
                ("#o-nas", "O Nás"),
                ("#nabidka", "Nabídka"),
                ("#kontakt", "Kontakt"),
            ]
        );
    }

    #[test]
    fn nav_targets_match_section_anchors() {
        let targets: Vec<_> = NAV_ITEMS.iter().map(|i| &i.href[1..]).collect();
        assert_eq!(
            targets,
            vec![anchors::ABOUT, anchors::OFFERINGS, anchors::CONTACT]
        );
        assert_eq!(hero::CTA_HREF, NAV_ITEMS[1].href);
    }
}
