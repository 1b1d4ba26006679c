use strum_macros::{Display, EnumIter};

/// The ranks that are considered when picking a label for a taxon.
///
/// Variants are declared from most to least specific, so `Rank::iter()` yields
/// them in label priority order.
#[rustfmt::skip]
#[derive(PartialEq, Eq, Debug, Clone, Copy, Display, EnumIter)]
pub enum Rank {
    #[strum(serialize="subspecies")]                  Subspecies,
    #[strum(serialize="species")]                     Species,
    #[strum(serialize="species subgroup")]            SpeciesSubgroup,
    #[strum(serialize="species group")]               SpeciesGroup,
    #[strum(serialize="genus")]                       Genus,
    #[strum(serialize="family")]                      Family,
    #[strum(serialize="order")]                       Order,
    #[strum(serialize="class")]                       Class,
    #[strum(serialize="phylum")]                      Phylum,
    #[strum(serialize="clade")]                       Clade,
    #[strum(serialize="superkingdom")]                Superkingdom,
    #[strum(serialize="kingdom")]                     Kingdom,
    #[strum(serialize="domain")]                      Domain,
}

impl Rank {
    /// Column names that may hold the name for this rank, in the order they are tried.
    /// Taxonomy dumps from different tools disagree on these, hence the list.
    /// Superkingdom and domain intentionally list each other.
    #[rustfmt::skip]
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Rank::Subspecies      => &["subspecies", "subspecies_name"],
            Rank::Species         => &["species", "species_name", "scientific_name", "name", "organism_name"],
            Rank::SpeciesSubgroup => &["species subgroup", "species_subgroup", "species_subgroup_name"],
            Rank::SpeciesGroup    => &["species group", "species_group", "species_group_name"],
            Rank::Genus           => &["genus", "genus_name"],
            Rank::Family          => &["family", "family_name"],
            Rank::Order           => &["order", "order_name"],
            Rank::Class           => &["class", "class_name"],
            Rank::Phylum          => &["phylum", "phylum_name"],
            Rank::Clade           => &["clade", "clade_name"],
            Rank::Superkingdom    => &["superkingdom", "domain", "kingdom", "superkingdom_name"],
            Rank::Kingdom         => &["kingdom", "kingdom_name"],
            Rank::Domain          => &["domain", "domain_name", "superkingdom"],
        }
    }
}
