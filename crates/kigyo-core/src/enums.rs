//! Closed enumerations.
//!
//! Every categorical field in a profile is restricted to one of these fixed
//! sets. Each enumeration exposes its accepted labels as `VARIANTS`, which the
//! field table hands to the validator and to the JSON Schema renderer, so the
//! wire labels are declared exactly once.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::Error;

/// Declare a closed enumeration whose wire form is a fixed string label.
macro_rules! closed_enum {
  (
    $(#[$meta:meta])*
    $vis:vis enum $name:ident {
      $( $(#[$vmeta:meta])* $variant:ident => $label:literal ),+ $(,)?
    }
  ) => {
    $(#[$meta])*
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    $vis enum $name {
      $( $(#[$vmeta])* $variant ),+
    }

    impl $name {
      /// Type name used in error messages.
      pub const NAME: &'static str = stringify!($name);

      /// Every accepted wire label, in declaration order.
      pub const VARIANTS: &'static [&'static str] = &[$($label),+];

      /// Every member, in declaration order.
      pub const ALL: &'static [$name] = &[$($name::$variant),+];

      /// The wire label for this member.
      pub fn as_str(&self) -> &'static str {
        match self {
          $( Self::$variant => $label ),+
        }
      }
    }

    impl fmt::Display for $name {
      fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
      }
    }

    impl FromStr for $name {
      type Err = Error;

      fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
          $( $label => Ok(Self::$variant), )+
          other => Err(Error::UnknownVariant {
            enumeration: Self::NAME,
            value:       other.to_string(),
          }),
        }
      }
    }

    impl Serialize for $name {
      fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
      }
    }

    impl<'de> Deserialize<'de> for $name {
      fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        label.parse().map_err(serde::de::Error::custom)
      }
    }
  };
}

// ─── Listing ─────────────────────────────────────────────────────────────────

closed_enum! {
  /// Tokyo Stock Exchange market segment.
  pub enum Market {
    Prime     => "Prime",
    Standard  => "Standard",
    Growth    => "Growth",
    NonListed => "Non-listed",
  }
}

closed_enum! {
  pub enum AccountingStandard {
    Jgaap  => "JGAAP",
    Ifrs   => "IFRS",
    UsGaap => "USGAAP",
  }
}

// ─── Location ────────────────────────────────────────────────────────────────

closed_enum! {
  /// Head-office prefecture, labelled with its kanji name.
  ///
  /// Shared by [`crate::profile::CompanyBasic`] and
  /// [`crate::profile::GroupCompany`]. `Other` covers head offices outside
  /// Japan.
  pub enum Prefecture {
    Hokkaido  => "北海道",
    Aomori    => "青森県",
    Iwate     => "岩手県",
    Miyagi    => "宮城県",
    Akita     => "秋田県",
    Yamagata  => "山形県",
    Fukushima => "福島県",
    Ibaraki   => "茨城県",
    Tochigi   => "栃木県",
    Gunma     => "群馬県",
    Saitama   => "埼玉県",
    Chiba     => "千葉県",
    Tokyo     => "東京都",
    Kanagawa  => "神奈川県",
    Niigata   => "新潟県",
    Toyama    => "富山県",
    Ishikawa  => "石川県",
    Fukui     => "福井県",
    Yamanashi => "山梨県",
    Nagano    => "長野県",
    Gifu      => "岐阜県",
    Shizuoka  => "静岡県",
    Aichi     => "愛知県",
    Mie       => "三重県",
    Shiga     => "滋賀県",
    Kyoto     => "京都府",
    Osaka     => "大阪府",
    Hyogo     => "兵庫県",
    Nara      => "奈良県",
    Wakayama  => "和歌山県",
    Tottori   => "鳥取県",
    Shimane   => "島根県",
    Okayama   => "岡山県",
    Hiroshima => "広島県",
    Yamaguchi => "山口県",
    Tokushima => "徳島県",
    Kagawa    => "香川県",
    Ehime     => "愛媛県",
    Kochi     => "高知県",
    Fukuoka   => "福岡県",
    Saga      => "佐賀県",
    Nagasaki  => "長崎県",
    Kumamoto  => "熊本県",
    Oita      => "大分県",
    Miyazaki  => "宮崎県",
    Kagoshima => "鹿児島県",
    Okinawa   => "沖縄県",
    Other     => "Other",
  }
}

// ─── Financial periods ───────────────────────────────────────────────────────

closed_enum! {
  pub enum PeriodType {
    Annual  => "annual",
    Quarter => "quarter",
  }
}

// ─── Organisation & communications ───────────────────────────────────────────

closed_enum! {
  /// Kind of HR or organisational announcement.
  pub enum OrgEventType {
    ExecutiveChange => "EXECUTIVE_CHANGE",
    DeptCreated     => "DEPT_CREATED",
    DxAppointment   => "DX_APPOINTMENT",
    Other           => "OTHER",
  }
}

closed_enum! {
  pub enum Platform {
    X         => "X",
    LinkedIn  => "LinkedIn",
    Instagram => "Instagram",
    YouTube   => "YouTube",
    Facebook  => "Facebook",
    TikTok    => "TikTok",
    Other     => "Other",
  }
}

// ─── Group structure ─────────────────────────────────────────────────────────

closed_enum! {
  /// How a group company relates to the profiled company.
  pub enum RelationType {
    Subsidiary   => "subsidiary",
    Affiliate    => "affiliate",
    JointVenture => "joint_venture",
    Other        => "other",
  }
}
