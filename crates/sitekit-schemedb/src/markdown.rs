//! Embedded planning-scheme document reference.
//!
//! The reference is a markdown document: one `## Council Name` section per
//! scheme, each entry a line of the form
//! `- TYPE — [Label](url) — Description` (the trailing description is
//! optional). Parsing produces the `(label, url, description)` triples the
//! document panel displays; nothing in the geometry or level engines
//! depends on this content.

use crate::model::SchemeDocument;
use regex::Regex;
use std::collections::BTreeMap;

/// Parse a scheme reference document into per-scheme document lists.
///
/// Unrecognized lines are ignored; entry lines outside any `##` section are
/// dropped. Scheme names map in sorted order.
pub fn parse_scheme_markdown(md_text: &str) -> BTreeMap<String, Vec<SchemeDocument>> {
    let link_pattern = Regex::new(r"^- ([A-Z ]+) — \[(.*?)\]\((.*?)\)(?: — (.*))?")
        .expect("invalid scheme link regex");

    let mut schemes: BTreeMap<String, Vec<SchemeDocument>> = BTreeMap::new();
    let mut current_scheme: Option<String> = None;

    for line in md_text.lines() {
        let line = line.trim();
        if let Some(heading) = line.strip_prefix("## ") {
            let name = heading.trim().to_string();
            schemes.entry(name.clone()).or_default();
            current_scheme = Some(name);
        } else if line.starts_with("- ") {
            let Some(scheme) = current_scheme.as_ref() else {
                continue;
            };
            if let Some(caps) = link_pattern.captures(line) {
                let doc_type = caps.get(1).map_or("", |m| m.as_str()).trim();
                let name = caps.get(2).map_or("", |m| m.as_str());
                let url = caps.get(3).map_or("", |m| m.as_str());
                let description = caps.get(4).map_or("", |m| m.as_str());
                if let Some(docs) = schemes.get_mut(scheme) {
                    docs.push(SchemeDocument::new(
                        format!("{} — {}", doc_type, name),
                        url,
                        description,
                    ));
                }
            }
        }
    }

    schemes
}

/// The embedded planning-scheme document reference.
pub const SCHEME_REFERENCE_MD: &str = r#"
# Planning Scheme Documents Reference

Below is a list of all planning schemes (councils) and their associated documents, sorted alphabetically.

---

## Brisbane City Council (BCC)

- WEBSITE — [Council Website](https://www.brisbane.qld.gov.au/)
- MAP — [Brisbane City ePlan](https://cityplan.brisbane.qld.gov.au/eplan) — (Unlikely to work for very new estates)
- PLAN — [BCC Dwelling House Code](https://cityplan.brisbane.qld.gov.au/eplan/rules/0/162/0/0/0/240) — Lots over 450sqm
- PLAN — [BCC Small Lot Code](https://cityplan.brisbane.qld.gov.au/eplan/rules/0/163/0/0/0/240) — Lots under 450sqm
- DRIVEWAY — [BSD-2025 - Grades (4.25m Crossover)](https://docs.brisbane.qld.gov.au/standard-drawings/20171201_bsd-2025_c_vehicle-crossing-driveway_grades_4.25m-verge.pdf) — See fact sheet also for small lot driveway
- STORMWATER — [Surface Drainage](https://docs.brisbane.qld.gov.au/City%20Plan/Standard%20Drawings/8000%20-%20Stormwater%20drainage%20and%20Water%20Quality/bsd-8113_c_roof-and-surface-water-drainage-for-site-developments.pdf) — Rubble Pit is not a lawful point of discharge!

---

## Goldcoast City Council (GCC)

- WEBSITE — [Council Website](https://www.goldcoast.qld.gov.au/Home)
- MAP — [City Plan Map](https://cityplan.goldcoast.qld.gov.au/eplan/property/0/0/210)
- PLAN — [Residential Zone Code](https://cityplan.goldcoast.qld.gov.au/eplan/rules/0/37/0/0/0/210) — Low 6.2.1, Med 6.2.2, High 6.2.3 Res.
- DRIVEWAY — [RSD-100 Vehicle Crossing](https://www.goldcoast.qld.gov.au/files/sharedassets/public/v/3/pdfs/brochures-amp-factsheets/standard-drawings-rsd-100-residential-driveways-sheet-1.pdf) — Dual occ, Dwelling and Multi dwelling required standard is NMP1.1
- TIPS — [Sloping Sites Guide](https://www.goldcoast.qld.gov.au/files/sharedassets/public/v/2/pdfs/brochures-amp-factsheets/building-on-sloping-sites.pdf)

---

## Gympie Regional Council (GRC)

- PLAN — [Planning Scheme 4.0](https://www.gympie.qld.gov.au/downloads/file/5065/planning-scheme-v4-0) — 6.1 P70 Residential Living Zone Code
- WEBSITE — [Council Website](https://www.gympie.qld.gov.au/)
- MAP — [Interactive Mapping](https://maps.gympie.qld.gov.au/IntraMaps23A/?project=PublicWeb&module=Property)
- STANDARD — [Standard Drawings](https://www.gympie.qld.gov.au/downloads/file/4044/standard-drawing-index)

---

## Ipswich City Council (ICC)

- WEBSITE — [Council Website](https://www.ipswich.qld.gov.au/)
- MAP — [Development.i Interactive Mapping](https://developmenti.ipswich.qld.gov.au/)
- PLAN — [Dwelling Code Ref.12.6.1 & 12.6.2](https://www.ipswichplanning.com.au/__data/assets/pdf_file/0020/1955/ips_part_12_div_06_residential_code.pdf) — Refer to 12.6 From Page 82(8)-90 for Setbacks (Hint: MP1.1 & MP1.2)
- DRIVEWAY — [SR.12 Driveway Profile](https://www.ipswich.qld.gov.au/__data/assets/pdf_file/0007/8962/sd_r12.pdf)
- STORMWATER — [Soakage Pits](https://www.ipswich.qld.gov.au/__data/assets/pdf_file/0016/10807/soakage_pit_guideline_drawing.pdf)

---

## Lockyer Valley Regional Council (LVRC)

- PLAN — [Planning Scheme V1](https://eplan.lvrc.qld.gov.au/eplan/rules/0/32/0/0/0/69) — 9.3.3 Dwelling house code
- WEBSITE — [Council Website](https://www.lockyervalley.qld.gov.au/)
- MAP — [Interactive Mapping](https://eplan.lvrc.qld.gov.au/)
- DRIVEWAY — [IPWEA RSD-100](https://www.ipwea-qnt.com/products-resources/new-standard-drawings)

---

## Logan City Council (LCC)

- WEBSITE — [Council Website](https://www.logan.qld.gov.au/)
- MAP — [Flood Mapping](https://flood.logan.qld.gov.au/)
- PLAN — [Planning Scheme](https://logan.isoplan.com.au/eplan/rules/0/137/0/0/0/192) — eScheme - Dwelling House Code
- DRIVEWAY — [Driveway Fact Sheet](https://www.logan.qld.gov.au/downloads/file/1518/vehicular-driveway-crossover-fact-sheet-)
- TIPS — [Dwellings Fact Sheet](https://www.logan.qld.gov.au/downloads/file/278/fact-sheet-domestic-housing)

---

## Moreton Bay Regional Council (MBRC)

- WEBSITE — [Council Website](https://www.moretonbay.qld.gov.au/)
- MAP — [Flood check](https://www.moretonbay.qld.gov.au/Services/Property-Ownership/Flooding/Flood-Check) — E-Mapping for flood check property report
- SCHEME — [9.4.3 Site earthworks code](https://www.moretonbay.qld.gov.au/files/assets/public/v/2/services/building-development/mbrc-plan/v7/mbrc-planning-scheme-part-9.4.3.pdf)
- SETBACKS — [9.3 Dwelling House Codes](https://www.moretonbay.qld.gov.au/files/assets/public/v/2/services/building-development/mbrc-plan/v7/mbrc-planning-scheme-part-9.3.1.pdf)
- STORMWATER — [SW Fact sheet](https://www.moretonbay.qld.gov.au/files/assets/public/v/1/services/building-development/building-plumbing/stormwater-for-domestic-properties-fact-sheet.pdf) — SW & Rubble Pits for Domestic Buildings

---

## Noosa Shire Council (NSC)

- WEBSITE — [Council Website](https://www.noosa.qld.gov.au/)
- PLAN — [Dwelling Fact Sheet](https://www.noosa.qld.gov.au/downloads/file/4138/fact-sheet-2-dwelling-house)
- DRIVEWAY — [RS-049 Driveway 1 of 2](https://www.noosa.qld.gov.au/downloads/file/1722/sd-roads-rs-049)
- STORMWATER — [Stormwater Guidelines](https://www.noosa.qld.gov.au/downloads/file/1478/stormwater-guidelines)

---

## Redland City Council (RCC)

- WEBSITE — [Council Website](https://www.redland.qld.gov.au/)
- MAP — [Development.i Interactive Mapping](https://developmenti.redland.qld.gov.au/)
- PLAN — [Planning Scheme Document](https://www.redland.qld.gov.au/download/downloads/id/6124/redland_city_plan_-_version_12.pdf)
- STORMWATER — [Stormwater Fact Sheet](https://www.redland.qld.gov.au/download/downloads/id/2878/stormwater_and_roofwater_drainage_fact_sheet.pdf) — Rubble pit yes, no spec provided. May req. Hydraulics

---

## Scenic Rim Regional Council (SRRC)

- WEBSITE — [Council Website](https://www.scenicrim.qld.gov.au/)
- TIPS — [Dual Occupancy Fact Sheet](https://www.scenicrim.qld.gov.au/downloads/file/6073/dual-occupancy-30june2023)
- TIPS — [Dwelling house and Secondary Dwelling Fact Sheet](https://www.scenicrim.qld.gov.au/downloads/file/6078/dwelling-houses-and-secondary-dwellings-30june2023)

---

## Somerset Regional Council (SRC)

- WEBSITE — [Council Website](https://www.somerset.qld.gov.au/)
- MAP — [eServices Mapping](https://eservices.somerset.qld.gov.au/mapping.aspx)
- SCHEME — [SRC Planning Scheme](https://www.somerset.qld.gov.au/downloads/file/2526/somerset-region-planning-scheme-version-4-2)
- DRIVEWAY — [SRC-ROAD-012](https://www.somerset.qld.gov.au/downloads/file/736/src-road-012-residential-driveway-invert-and-slab-or-tracks) — RESIDENTIAL DRIVEWAY INVERT AND SLAB OR TRACKS
- STORMWATER — [No ref. to Rubble Pit](#) — Unable to find reference to rubble pit.

---

## Sunshine Coast Council (SCC)

- WEBSITE — [Council Website](https://www.sunshinecoast.qld.gov.au/development)
- MAP — [Development.i Interactive Mapping](https://developmenti.sunshinecoast.qld.gov.au/Home/) — PD Online for Sunshine Coast
- PLAN — [Dwelling House Code](https://publicdocs.scc.qld.gov.au/hpecmwebdrawer/Record/22407391/File/document)
- DRIVEWAY — [Crossover Checklist](https://publicdocs.scc.qld.gov.au/hpecmwebdrawer/RecordHtml/20057629) — Provides offsets for assets
- STORMWATER — [Stormwater Fact Sheet](https://publicdocs.scc.qld.gov.au/hpecmwebdrawer/RecordHtml/20056342) — Mentions points of discharge and rubble pits

---
"#;
