use serde_json::Value;

/// Business attributes derived from a form response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CanonicalAttribute {
    Role,
    CityProject,
    FirstName,
    LastName,
    Phone,
    Email,
    PriceNetSeller,
    BudgetMax,
    PropertyType,
    SurfaceM2,
    LandSurfaceM2,
    Bedrooms,
}

impl CanonicalAttribute {
    pub fn as_str(&self) -> &'static str {
        match self {
            CanonicalAttribute::Role => "role",
            CanonicalAttribute::CityProject => "city_project",
            CanonicalAttribute::FirstName => "first_name",
            CanonicalAttribute::LastName => "last_name",
            CanonicalAttribute::Phone => "phone",
            CanonicalAttribute::Email => "email",
            CanonicalAttribute::PriceNetSeller => "price_net_seller",
            CanonicalAttribute::BudgetMax => "budget_max",
            CanonicalAttribute::PropertyType => "property_type",
            CanonicalAttribute::SurfaceM2 => "surface_m2",
            CanonicalAttribute::LandSurfaceM2 => "land_surface_m2",
            CanonicalAttribute::Bedrooms => "bedrooms",
        }
    }
}

/// Normalized attributes in mapping-table order. Only built by the canonical
/// mapper, so every value has been through its attribute's normalizer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Canonical {
    entries: Vec<(CanonicalAttribute, Value)>,
}

impl Canonical {
    pub(crate) fn push(&mut self, attribute: CanonicalAttribute, value: Value) {
        self.entries.push((attribute, value));
    }

    pub fn get(&self, attribute: CanonicalAttribute) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(a, _)| *a == attribute)
            .map(|(_, v)| v)
    }

    pub fn entries(&self) -> &[(CanonicalAttribute, Value)] {
        &self.entries
    }
}

