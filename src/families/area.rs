use crate::constants::{ConstantEntry, ConstantFamily, ConstantSource, FamilyRegistry};
use crate::error::CatalogError;
use crate::families::AreaGroupConstants;
use crate::i18n::TranslationFields;
use crate::models::Area;
use uuid::Uuid;

const ICON_BASE_URL: &str = "https://altinncdn.no/authorization/accesspackageicons/";

/// Authorization areas that access packages are filed under.
///
/// Every area carries an `accesspackage:area:` urn, resolvable through
/// `try_get_by_urn` without regard to case.
pub struct AreaConstants;

impl AreaConstants {
    pub const TAX_FEES_ACCOUNTING_AND_CUSTOMS: Uuid = Uuid::from_u128(0x7d32591d_34b7_4afc_8afa_013722f8c05d);
    pub const PERSONNEL: Uuid = Uuid::from_u128(0x6f7f3b02_8b5a_4823_9468_0f4646d3a790);
    pub const ENVIRONMENT_ACCIDENT_AND_SAFETY: Uuid = Uuid::from_u128(0xa8834a7c_ed89_4c73_b5d5_19a2347f3b13);
    pub const MAIL_AND_ARCHIVE: Uuid = Uuid::from_u128(0x6f938de8_34f2_4bab_a0c6_3a3eb64aad3b);
    pub const BUSINESS_AFFAIRS: Uuid = Uuid::from_u128(0x3f5df819_7aca_49e1_bf6f_3e8f120f20d1);
    pub const INTEGRATIONS: Uuid = Uuid::from_u128(0x892e98c6_1696_46e7_9bb1_59c08761ec64);
    pub const MANAGE_ACCESS: Uuid = Uuid::from_u128(0xe4ae823f_41db_46ed_873f_8a5d1378fff8);
    pub const AGRICULTURE_FORESTRY_HUNTING_FISHING_AND_AQUACULTURE: Uuid = Uuid::from_u128(0xfc93d25e_80bc_469a_aa43_a6cee80eb3e2);
    pub const CONSTRUCTION_INFRASTRUCTURE_AND_REAL_ESTATE: Uuid = Uuid::from_u128(0x536b317c_ef85_45d4_9b48_6511578e1952);
    pub const TRANSPORT_AND_STORAGE: Uuid = Uuid::from_u128(0x6ff90072_566b_4acd_baac_ec477534e712);
    pub const HEALTH_CARE_AND_PROTECTION: Uuid = Uuid::from_u128(0xeab59b26_833f_40ca_9e27_72107e8f1908);
    pub const CHILDHOOD_AND_EDUCATION: Uuid = Uuid::from_u128(0x7326614f_cf7c_492e_8e7f_d74e6e4a8970);
    pub const ENERGY_WATER_SEWAGE_AND_WASTE: Uuid = Uuid::from_u128(0x6e152c10_0f63_4060_9b14_66808e7ac320);
    pub const INDUSTRIES: Uuid = Uuid::from_u128(0x10c2dd29_5ab3_4a26_900e_8e2326150353);
    pub const CULTURE_AND_VOLUNTEERING: Uuid = Uuid::from_u128(0x5996ba37_6db0_4391_8918_b1b0bd4b394b);
    pub const COMMERCE_ACCOMMODATION_AND_CATERING: Uuid = Uuid::from_u128(0x3797e9f0_dd83_404c_9897_e356c32ef600);
    pub const OTHER_SERVICE_INDUSTRIES: Uuid = Uuid::from_u128(0xe31169f6_d4c7_4e45_93c7_f90bc285b639);
    pub const AUTHORIZATIONS_FOR_ACCOUNTANTS: Uuid = Uuid::from_u128(0x64cbcdc8_01c9_448c_b3d2_eb9582beb3c2);
    pub const AUTHORIZATIONS_FOR_AUDITORS: Uuid = Uuid::from_u128(0x7df15290_f43c_4831_a1b4_3edfa43e526d);
    pub const AUTHORIZATIONS_FOR_BANKRUPTCY_ESTATES: Uuid = Uuid::from_u128(0xf3daddb7_6e21_455e_b6d2_65a281375b6b);
    pub const AUTHORIZATIONS_FOR_BUSINESSES: Uuid = Uuid::from_u128(0x0195efb8_7c80_76b3_bb86_ae9dfd74bca2);
    pub const WORKING_LIFE_SCHOOL_AND_EDUCATION: Uuid = Uuid::from_u128(0x26be6035_a1a9_4ac2_a95b_0338c526f932);
    pub const FAMILY_AND_LEISURE: Uuid = Uuid::from_u128(0x0b3223ad_f02d_4249_8746_fc8e003292e0);
    pub const HEALTH_AND_CARE: Uuid = Uuid::from_u128(0x7547c6d0_42c5_4dfd_bb8e_46453fa011eb);
    pub const CULTURE_SPORT_AND_VOLUNTEERING: Uuid = Uuid::from_u128(0x10a73dfd_1e70_44d4_b651_cd8db81e8b1b);
    pub const PATENTS_CERTIFICATES_AND_ATTESTATIONS: Uuid = Uuid::from_u128(0x36cac8e4_56dc_4825_a3ea_03f8f3d1a05b);
    pub const POLICE_AND_JUDICIARY: Uuid = Uuid::from_u128(0x0995c7e3_d791_4797_9ceb_1c40eadf9c81);
    pub const PLAN_BUILDING_AND_PROPERTY: Uuid = Uuid::from_u128(0x4a9b468d_c008_4ad3_9532_ff4b949f13b7);
    pub const TRAFFIC_AND_TRANSPORT: Uuid = Uuid::from_u128(0x287836cc_69ee_4220_84f1_35623a85ec7b);
    pub const TAX_LEVY_BANK_AND_INSURANCE: Uuid = Uuid::from_u128(0xdcc8daab_e658_4251_a94f_a9e1c06b3833);
    pub const ADMINISTRATOR_RIGHTS: Uuid = Uuid::from_u128(0x7d77a783_710c_463d_9187_ed1f4bbc23ad);
    pub const GUARDIANSHIP: Uuid = Uuid::from_u128(0x2064fcbe_4eb5_42e3_9966_fd8aef27f36a);
    pub const VERGEMAL_BANK: Uuid = Uuid::from_u128(0x2b855fbf_0104_4c3c_a115_4e0dacfb0bf1);
    pub const VERGEMAL_INSURANCE_COMPANY: Uuid = Uuid::from_u128(0xaa9b2a34_fdfd_4c3d_9894_06795f8a621f);
    pub const VERGEMAL_THE_HOUSE_BANK: Uuid = Uuid::from_u128(0x07524eb8_7db0_49ac_a34c_4cc56501f26f);
    pub const VERGEMAL_DEBT_COLLECTION_COMPANY: Uuid = Uuid::from_u128(0x8d4c94dc_bf59_4f3d_bf3f_c4915d582997);
    pub const VERGEMAL_NORWEGIAN_MAPPING_AUTHORITY: Uuid = Uuid::from_u128(0x217820cc_911d_416b_92f1_fb5dc0cc1f04);
    pub const VERGEMAL_BAILIFF: Uuid = Uuid::from_u128(0x46d7f172_caad_4494_9c6d_3add8d120920);
    pub const VERGEMAL_TAX_AUTHORITY: Uuid = Uuid::from_u128(0xa0d54306_9af8_48c3_beb4_e37085642c95);
    pub const VERGEMAL_NORWEGIAN_COLLECTION_CENTER: Uuid = Uuid::from_u128(0x4a780efa_8609_43be_b059_6c59473c46dd);
    pub const VERGEMAL_STATE_ADMINISTRATOR: Uuid = Uuid::from_u128(0xb34f7595_498f_458c_8a18_06ca2e8d8918);
    pub const VERGEMAL_OTHER_PURCHASES_AND_CONCLUSIONS_OF_AGREEMENTS: Uuid = Uuid::from_u128(0x4cf6b40c_24f2_4006_b280_b73b06d23504);
    pub const VERGEMAL_MUNICIPALITY: Uuid = Uuid::from_u128(0x0c1c1143_5e8d_4979_aef8_7de61f05a467);
    pub const VERGEMAL_NAV: Uuid = Uuid::from_u128(0x1dfa599d_1ade_48bd_86b4_ac033027c3d5);
    pub const VERGEMAL_PATIENT_TRAVEL: Uuid = Uuid::from_u128(0x0f1095a5_1e2b_4756_b376_bab8c36a89e4);
    pub const VERGEMAL_PATIENT_INFORMATION_AND_SERVICES: Uuid = Uuid::from_u128(0x43e8458d_4b88_49b6_b079_38dfa1ba663a);
}

#[allow(clippy::too_many_arguments)]
fn area(
    id: Uuid,
    group_id: Uuid,
    name: &str,
    description: &str,
    icon: &str,
    urn: &str,
    en: [&str; 2],
    nn: [&str; 2],
) -> Result<ConstantEntry<Area>, CatalogError> {
    Ok(ConstantEntry::new(id, |id| Area {
        id,
        name: name.to_string(),
        description: description.to_string(),
        icon_url: format!("{}{}", ICON_BASE_URL, icon),
        group_id,
        urn: urn.to_string(),
    })?
    .with_english(TranslationFields::new([("Name", en[0]), ("Description", en[1])]))
    .with_nynorsk(TranslationFields::new([("Name", nn[0]), ("Description", nn[1])])))
}

impl ConstantSource for AreaConstants {
    type Entity = Area;
    const FAMILY: &'static str = "Area";

    fn declare() -> Result<Vec<ConstantEntry<Area>>, CatalogError> {
        Ok(vec![
            area(
                Self::TAX_FEES_ACCOUNTING_AND_CUSTOMS,
                AreaGroupConstants::GENERAL,
                "Skatt, avgift, regnskap og toll",
                "Dette fullmaktsområdet omfatter tilgangspakker knyttet til skatt, avgift, regnskap og toll.",
                "Aksel_Money_SackKroner.svg",
                "accesspackage:area:skatt_avgift_regnskap_og_toll",
                ["Taxes, Fees, Accounting and Customs", "This authorization area includes access packages related to taxes, fees, accounting, and customs."],
                ["Skatt, avgift, rekneskap og toll", "Dette fullmaktsområdet omfattar tilgangspakkar knytt til skatt, avgift, rekneskap og toll."],
            )?,
            area(
                Self::PERSONNEL,
                AreaGroupConstants::GENERAL,
                "Personale",
                "Dette fullmaktsområdet omfatter tilgangspakker knyttet til personale.",
                "Aksel_People_PersonGroup.svg",
                "accesspackage:area:personale",
                ["Personnel", "This authorization area includes access packages related to personnel."],
                ["Personale", "Dette fullmaktsområdet omfattar tilgangspakkar knytt til personalet."],
            )?,
            area(
                Self::ENVIRONMENT_ACCIDENT_AND_SAFETY,
                AreaGroupConstants::GENERAL,
                "Miljø, ulykke og sikkerhet",
                "Dette fullmaktsområdet omfatter tilgangspakker knyttet til miljø, ulykke og sikkerhet.",
                "Aksel_People_HandHeart.svg",
                "accesspackage:area:miljo_ulykke_og_sikkerhet",
                ["Environment, Accident and Safety", "This authorization area includes access packages related to environment, accident, and safety."],
                ["Miljø, ulykke og tryggleik", "Dette fullmaktsområdet omfattar tilgangspakkar knytt til miljø, ulykke og tryggleik."],
            )?,
            area(
                Self::MAIL_AND_ARCHIVE,
                AreaGroupConstants::GENERAL,
                "Post og arkiv",
                "Dette fullmaktsområdet omfatter tilgangspakker knyttet til post og arkiv.",
                "Aksel_Interface_EnvelopeClosed.svg",
                "accesspackage:area:post_og_arkiv",
                ["Mail and Archive", "This authorization area includes access packages related to mail and archive."],
                ["Post og arkiv", "Dette fullmaktsområdet omfattar tilgangspakkar knytt til post og arkiv."],
            )?,
            area(
                Self::BUSINESS_AFFAIRS,
                AreaGroupConstants::GENERAL,
                "Forhold ved virksomheten",
                "Dette fullmaktsområdet omfatter tilgangspakker knyttet til forhold ved virksomheten.",
                "Aksel_Workplace_Buildings3.svg",
                "accesspackage:area:forhold_ved_virksomheten",
                ["Business Affairs", "This authorization area includes access packages related to business affairs."],
                ["Forhold ved verksemda", "Dette fullmaktsområdet omfattar tilgangspakkar knytt til forhold ved verksemda."],
            )?,
            area(
                Self::INTEGRATIONS,
                AreaGroupConstants::GENERAL,
                "Integrasjoner",
                "Dette fullmaktsområdet omfatter tilgangspakker knyttet til integrasjoner.",
                "Aksel_Interface_RotateLeft.svg",
                "accesspackage:area:integrasjoner",
                ["Integrations", "This authorization area includes access packages related to integrations."],
                ["Integrasjonar", "Dette fullmaktsområdet omfattar tilgangspakkar knytt til integrasjonar."],
            )?,
            area(
                Self::MANAGE_ACCESS,
                AreaGroupConstants::GENERAL,
                "Administrere tilganger",
                "Dette fullmaktsområdet omfatter tilgangspakker knyttet til administrere tilganger.",
                "Altinn_Administrere-tilganger_PersonLock.svg",
                "accesspackage:area:administrere_tilganger",
                ["Manage Access", "This authorization area includes access packages related to managing access."],
                ["Administrere tilgongar", "Dette fullmaktsområdet omfattar tilgangspakkar knytt til administrering av tilgongar."],
            )?,
            area(
                Self::AGRICULTURE_FORESTRY_HUNTING_FISHING_AND_AQUACULTURE,
                AreaGroupConstants::INDUSTRY,
                "Jordbruk, skogbruk, jakt, fiske og akvakultur",
                "Dette fullmaktsområdet omfatter tilgangspakker knyttet til jordbruk, skogbruk, jakt, fiske og akvakultur.",
                "Aksel_Nature-and-animals-Plant.svg",
                "accesspackage:area:jordbruk_skogbruk_jakt_fiske_og_akvakultur",
                ["Agriculture, Forestry, Hunting, Fishing and Aquaculture", "This authorization area includes access packages related to agriculture, forestry, hunting, fishing and aquaculture."],
                ["Jordbruk, skogbruk, jakt, fiske og akvakultur", "Dette fullmaktsområdet omfattar tilgangspakkar knytt til jordbruk, skogbruk, jakt, fiske og akvakultur."],
            )?,
            area(
                Self::CONSTRUCTION_INFRASTRUCTURE_AND_REAL_ESTATE,
                AreaGroupConstants::INDUSTRY,
                "Bygg, anlegg og eiendom",
                "Dette fullmaktsområdet omfatter tilgangspakker knyttet til bygg, anlegg og eiendom.",
                "Altinn_Bygg-anlegg-og-eiendom_HandHouse.svg",
                "accesspackage:area:bygg_anlegg_og_eiendom",
                ["Construction, Infrastructure and Real Estate", "This authorization area includes access packages related to construction, infrastructure and real estate."],
                ["Bygg, anlegg og eigedom", "Dette fullmaktsområdet omfattar tilgangspakkar knytt til bygg, anlegg og eigedom."],
            )?,
            area(
                Self::TRANSPORT_AND_STORAGE,
                AreaGroupConstants::INDUSTRY,
                "Transport og lagring",
                "Dette fullmaktsområdet omfatter tilgangspakker knyttet til transport og lagring.",
                "Aksel_Transportation_Truck.svg",
                "accesspackage:area:transport_og_lagring",
                ["Transport and Storage", "This authorization area includes access packages related to transport and storage."],
                ["Transport og lagring", "Dette fullmaktsområdet omfattar tilgangspakkar knytt til transport og lagring."],
            )?,
            area(
                Self::HEALTH_CARE_AND_PROTECTION,
                AreaGroupConstants::INDUSTRY,
                "Helse, pleie, omsorg og vern",
                "Dette fullmaktsområdet omfatter tilgangspakker knyttet til helse, pleie, omsorg og vern.",
                "Aksel_Wellness_Hospital.svg",
                "accesspackage:area:helse_pleie_omsorg_og_vern",
                ["Health, Care and Protection", "This authorization area includes access packages related to health, care and protection."],
                ["Helse, pleie, omsorg og vern", "Dette fullmaktsområdet omfattar tilgangspakkar knytt til helse, pleie, omsorg og vern."],
            )?,
            area(
                Self::CHILDHOOD_AND_EDUCATION,
                AreaGroupConstants::INDUSTRY,
                "Oppvekst og utdanning",
                "Dette fullmaktsområdet omfatter tilgangspakker knyttet til oppvekst og utdanning.",
                "Aksel_Workplace_Buildings2.svg",
                "accesspackage:area:oppvekst_og_utdanning",
                ["Childhood and Education", "This authorization area includes access packages related to childhood and education."],
                ["Oppvekst og utdanning", "Dette fullmaktsområdet omfattar tilgangspakkar knytt til oppvekst og utdanning."],
            )?,
            area(
                Self::ENERGY_WATER_SEWAGE_AND_WASTE,
                AreaGroupConstants::INDUSTRY,
                "Energi, vann, avløp og avfall",
                "Dette fullmaktsområdet omfatter tilgangspakker knyttet til energi, vann, avløp og avfall.",
                "Aksel_Workplace_TapWater.svg",
                "accesspackage:area:energi_vann_avlop_og_avfall",
                ["Energy, Water, Sewage and Waste", "This authorization area includes access packages related to energy, water, sewage and waste."],
                ["Energi, vann, avløp og avfall", "Dette fullmaktsområdet omfattar tilgangspakkar knytt til energi, vann, avløp og avfall."],
            )?,
            area(
                Self::INDUSTRIES,
                AreaGroupConstants::INDUSTRY,
                "Industrier",
                "Dette fullmaktsområdet omfatter tilgangspakker knyttet til industrier.",
                "Altinn_Industrier_Factory.svg",
                "accesspackage:area:industrier",
                ["Industries", "This authorization area includes access packages related to industries."],
                ["Industriar", "Dette fullmaktsområdet omfattar tilgangspakkar knytt til industriar."],
            )?,
            area(
                Self::CULTURE_AND_VOLUNTEERING,
                AreaGroupConstants::INDUSTRY,
                "Kultur og frivillighet",
                "Dette fullmaktsområdet omfatter tilgangspakker knyttet til kultur og frivillighet.",
                "Aksel_Wellness_HeadHeart.svg",
                "accesspackage:area:kultur_og_frivillighet",
                ["Culture and Volunteering", "This authorization area includes access packages related to culture and volunteering."],
                ["Kultur og frivillighet", "Dette fullmaktsområdet omfattar tilgangspakkar knytt til kultur og frivillighet."],
            )?,
            area(
                Self::COMMERCE_ACCOMMODATION_AND_CATERING,
                AreaGroupConstants::INDUSTRY,
                "Handel, overnatting og servering",
                "Dette fullmaktsområdet omfatter tilgangspakker knyttet til handel, overnatting og servering.",
                "Aksel_Wellness_TrayFood.svg",
                "accesspackage:area:handel_overnatting_og_servering",
                ["Commerce, Accommodation and Catering", "This authorization area includes access packages related to commerce, accommodation and catering."],
                ["Handel, overnatting og servering", "Dette fullmaktsområdet omfattar tilgangspakkar knytt til handel, overnatting og servering."],
            )?,
            area(
                Self::OTHER_SERVICE_INDUSTRIES,
                AreaGroupConstants::INDUSTRY,
                "Andre tjenesteytende næringer",
                "Dette fullmaktsområdet omfatter tilgangspakker knyttet til andre tjenesteytende næringer.",
                "Aksel_Workplace_Reception.svg",
                "accesspackage:area:andre_tjenesteytende_naeringer",
                ["Other Service Industries", "This authorization area includes access packages related to other service industries."],
                ["Andre tenesteytande næringar", "Dette fullmaktsområdet omfattar tilgangspakkar knytt til andre tenesteytande næringar."],
            )?,
            area(
                Self::AUTHORIZATIONS_FOR_ACCOUNTANTS,
                AreaGroupConstants::SPECIAL,
                "Fullmakter for regnskapsfører",
                "Dette fullmaktsområdet omfatter tilgangspakker knyttet til fullmakter for regnskapsfører.",
                "Aksel_Home_Calculator.svg",
                "accesspackage:area:fullmakter_for_regnskapsforer",
                ["Authorizations for Accountants", "This authorization area includes access packages related to authorizations for accountants."],
                ["Fullmakter for rekneskapsførar", "Dette fullmaktsområdet omfattar tilgangspakkar knytt til fullmakter for rekneskapsførar."],
            )?,
            area(
                Self::AUTHORIZATIONS_FOR_AUDITORS,
                AreaGroupConstants::SPECIAL,
                "Fullmakter for revisor",
                "Dette fullmaktsområdet omfatter tilgangspakker knyttet til fullmakter for revisor.",
                "Aksel_Files-and-application_FileSearch.svg",
                "accesspackage:area:fullmakter_for_revisor",
                ["Authorizations for Auditors", "This authorization area includes access packages related to authorizations for auditors."],
                ["Fullmakter for revisor", "Dette fullmaktsområdet omfattar tilgangspakkar knytt til fullmakter for revisor."],
            )?,
            area(
                Self::AUTHORIZATIONS_FOR_BANKRUPTCY_ESTATES,
                AreaGroupConstants::SPECIAL,
                "Fullmakter for konkursbo",
                "Dette fullmaktsområdet omfatter tilgangspakker knyttet til fullmakter for konkursbo.",
                "Aksel_Statistics-and-math_TrendDown.svg",
                "accesspackage:area:fullmakter_for_konkursbo",
                ["Authorizations for Bankruptcy Estates", "This authorization area includes access packages related to authorizations for bankruptcy estates."],
                ["Fullmakter for konkursbo", "Dette fullmaktsområdet omfattar tilgangspakkar knytt til fullmakter for konkursbo."],
            )?,
            area(
                Self::AUTHORIZATIONS_FOR_BUSINESSES,
                AreaGroupConstants::SPECIAL,
                "Fullmakter for forretningsfører",
                "Dette fullmaktsområdet omfatter tilgangspakker knyttet til fullmakter for forretningsfører.",
                "Aksel_Statistics-and-math_TrendDown.svg",
                "accesspackage:area:fullmakter_for_forretningsforer",
                ["Authorizations for Bussineses", "This authorization area includes access packages related to authorizations for bussineses."],
                ["Fullmakter for forretningsfører", "Dette fullmaktsområdet omfattar tilgangspakkar knytt til fullmakter for forretningsfører."],
            )?,
            area(
                Self::WORKING_LIFE_SCHOOL_AND_EDUCATION,
                AreaGroupConstants::INHABITANT,
                "Arbeidsliv, skole og utdanning",
                "Dette fullmaktsområdet omfatter tilgangspakker som gir fullmakter til tjenester og ressurser som omhandler Arbeid, utdanning og arbeidsforhold. Ved innføring av nye digitale tjenester kan det bli endringer i tilganger som fullmaktene gir.",
                "Aksel_Workplace_Buildings2.svg",
                "accesspackage:area:arbeidsliv_skole_og_utdanning",
                ["Working life, school and education", "This authorization area includes access packages that grant authorizations for services and resources that deal with Work, education and working conditions. When new digital services are introduced, there may be changes in the access that the authorizations provide."],
                ["Arbeidsliv, skule og utdanning", "Dette fullmaktsområdet omfattar tilgangspakkar som gir fullmakter til tenester og ressursar som omhandlar Arbeid, utdanning og arbeidsforhold. Ved innføring av nye digitale tenester kan det bli endringar i tilgangar som fullmaktene gir."],
            )?,
            area(
                Self::FAMILY_AND_LEISURE,
                AreaGroupConstants::INHABITANT,
                "Familie og fritid",
                "Dette fullmaktsområdet omfatter tilgangspakker som gir fullmakter til tjenester og ressurser knyttet til familie og fritid. Ved innføring av nye digitale tjenester kan det bli endringer i tilganger som fullmaktene gir.",
                "PersonTallShort.svg",
                "accesspackage:area:familie_og_fritid",
                ["Family and leisure", "This authorization area includes access packages that grant authorizations for services and resources related to family and leisure. When new digital services are introduced, there may be changes in the access that the authorizations provide."],
                ["Familie og fritid", "Dette fullmaktsområdet omfattar tilgangspakkar som gir fullmakter til tenester og ressursar knytte til familie og fritid. Ved innføring av nye digitale tenester kan det bli endringar i tilgangar som fullmaktene gir."],
            )?,
            area(
                Self::HEALTH_AND_CARE,
                AreaGroupConstants::INHABITANT,
                "Helse og omsorg",
                "Dette fullmaktsområdet omfatter tilgangspakker som gir fullmakter til tjenester og ressurser knyttet til helse og omsorg. Ved innføring av nye digitale tjenester kan det bli endringer i tilganger som fullmaktene gir.",
                "Aksel_Wellness_Hospital.svg",
                "accesspackage:area:helse_og_omsorg",
                ["Health and care", "This authorization area includes access packages that grant authorizations for services and resources related to health and care. When new digital services are introduced, there may be changes in the access that the authorizations provide."],
                ["Familie og fritid", "Dette fullmaktsområdet omfattar tilgangspakkar som gir fullmakter til tenester og ressursar knytte til helse og omsorg. Ved innføring av nye digitale tenester kan det bli endringar i tilgangar som fullmaktene gir."],
            )?,
            area(
                Self::CULTURE_SPORT_AND_VOLUNTEERING,
                AreaGroupConstants::INHABITANT,
                "Kultur, idrett og frivillighet",
                "Dette fullmaktsområdet omfatter tilgangspakker som gir fullmakter til tjenester innen kultur, idrett og fritidsaktiviteter. Ved innføring av nye digitale tjenester kan det bli endringer i tilganger som fullmaktene gir.",
                "Aksel_Wellness_HeadHeart.svg",
                "accesspackage:area:kultur_idrett_og_frivillighet",
                ["Culture, sport and volunteering", "This authorized area includes access packages that grant authorizations for services within culture, sports and leisure activities. When new digital services are introduced, there may be changes in the access that the authorizations provide."],
                ["Kultur, idrett og frivilligheit", "Dette fullmaktsområdet omfattar tilgangspakkar som gir fullmakter til tenester innan kultur, idrett og fritidsaktivitetar. Ved innføring av nye digitale tenester kan det bli endringar i tilgangar som fullmaktene gir."],
            )?,
            area(
                Self::PATENTS_CERTIFICATES_AND_ATTESTATIONS,
                AreaGroupConstants::INHABITANT,
                "Patenter, sertifikater og attester",
                "Fullmaktsområde for tilgangspakker for tjenester som er relatert til å søke om patent, sertifisering, attester, design og varemerker. Ved innføring av nye digitale tjenester kan det bli endringer i tilganger som fullmakten gir.",
                "Seal.svg",
                "accesspackage:area:patenter_sertifikater_og_attester",
                ["Patents, certificates, and attestations", "Authorization area for access packages for services related to applying for patents, certifications, certificates, designs and trademarks. When new digital services are introduced, there may be changes in the access that the authorization provides."],
                ["Patent, sertifikat og attestar", "Fullmaktsområde for tilgangspakkar for tenester som er relaterte til å søkja om patent, sertifisering, attestar, design og varemerke. Ved innføring av nye digitale tenester kan det bli endringar i tilgangar som fullmakta gir."],
            )?,
            area(
                Self::POLICE_AND_JUDICIARY,
                AreaGroupConstants::INHABITANT,
                "Politi og rettsvesen",
                "Fullmaktsområde for tilgangspakker for tjenester som er relatert til politisaker og andre forhold til rettsvesenet. Ved innføring av nye digitale tjenester kan det bli endringer i tilganger som fullmakten gir.",
                "GavelSoundBlock.svg",
                "accesspackage:area:politi_og_rettsvesen",
                ["Police and judiciary", "Authorization area for access packages for services related to police matters and other matters with the judiciary. When new digital services are introduced, there may be changes in the access that the authorization provides."],
                ["Politi og rettsvesen", "Fullmaktsområde for tilgangspakkar for tenester som er relaterte til politisaker og andre forhold til rettsvesenet. Ved innføring av nye digitale tenester kan det bli endringar i tilgangar som fullmakta gir."],
            )?,
            area(
                Self::PLAN_BUILDING_AND_PROPERTY,
                AreaGroupConstants::INHABITANT,
                "Plan, bygg og eiendom",
                "Fullmaktsområde for tilgangspakker for tjenester som er relatert til søknader og korrespondanse innen plan og eiendom. Ved innføring av nye digitale tjenester kan det bli endringer i tilganger som fullmakten gir.",
                "Altinn_Bygg-anlegg-og-eiendom_HandHouse.svg",
                "accesspackage:area:plan_bygg_og_eiendom",
                ["Plan, building and property", "Authorization area for access packages for services related to applications and correspondence within planning and property. When new digital services are introduced, there may be changes in the access that the authorization provides."],
                ["Plan, bygg og eigedom", "Fullmaktsområde for tilgangspakkar for tenester som er relaterte til søknader og korrespondanse innan plan og eigedom. Ved innføring av nye digitale tenester kan det bli endringar i tilgangar som fullmakta gir."],
            )?,
            area(
                Self::TRAFFIC_AND_TRANSPORT,
                AreaGroupConstants::INHABITANT,
                "Trafikk og transport",
                "Fullmaktsområde for tilgangspakker for tjenester som er relatert til søknader og korrespondanse som gjelder trafikk og transportforhold. Ved innføring av nye digitale tjenester kan det bli endringer i tilganger som fullmakten gir.",
                "Car.svg",
                "accesspackage:area:trafikk_og_transport",
                ["Traffic and transport", "Authorization area for access packages for services related to applications and correspondence relating to traffic and transport conditions. When new digital services are introduced, there may be changes in the access that the authorization provides."],
                ["Plan, bygg og eigedom", "Fullmaktsområde for tilgangspakkar for tenester som er relaterte til søknader og korrespondanse som gjeld trafikk og transportforhold. Ved innføring av nye digitale tenester kan det bli endringar i tilgangar som fullmakta gir."],
            )?,
            area(
                Self::TAX_LEVY_BANK_AND_INSURANCE,
                AreaGroupConstants::INHABITANT,
                "Skatt, avgift, bank og forsikring",
                "Fullmaktsområde for tilgangspakker for tjenester som er relatert til søknader og korrespondanse som gjelder skatt, avgifter, bank, forsikring og andre økonomiske forhold. Ved innføring av nye digitale tjenester kan det bli endringer i tilganger som fullmakten gir.",
                "Aksel_Money_SackKroner.svg",
                "accesspackage:area:skatt_avgift_bank_og_forsikring",
                ["Tax, levy, bank and insurance", "Authorization area for access packages for services related to applications and correspondence relating to tax, duties, banking, insurance and other financial matters. When new digital services are introduced, there may be changes in the access that the authorization provides."],
                ["Skatt, avgift, bank og forsikring", "Fullmaktsområde for tilgangspakkar for tenester som er relaterte til søknader og korrespondanse som gjeld skatt, avgifter, bank, forsikring og andre økonomiske forhold. Ved innføring av nye digitale tenester kan det bli endringar i tilgangar som fullmakta gir."],
            )?,
            area(
                Self::ADMINISTRATOR_RIGHTS,
                AreaGroupConstants::INHABITANT,
                "Administratorrettigheter",
                "Dette fullmaktsområde skal gi privatperson mulighet til å delegere tilgangsstyring til andre.",
                "PersonSuit.svg",
                "accesspackage:area:administratorrettigheter",
                ["Administrator rights", "This area of ​​authority shall give the private person the opportunity to delegate access control to others."],
                ["Administratorrettar", "Dette fullmaktsområdet skal gi privatperson høve til å delegera tilgangsstyring til andre."],
            )?,
            area(
                Self::GUARDIANSHIP,
                AreaGroupConstants::INHABITANT,
                "Vergemål",
                "Vergefullmakten legitimerer at vergen kan opptre på vegne av personene som har verge. I vergefullmakten står det hvilke oppgaver vergen kan bistå med. Hva som står i vergefullmakten varierer ut fra hvilket bistandsbehov personen med verge har, og hva personen har samtykket til.",
                "Aksel_Statistics-and-math_TrendDown.svg",
                "accesspackage:area:vergemal",
                ["Guardianship", "Access directly linked to the role of private person in the National Register. This role can still provide access to services that only exist in the old solution. See the list in the old solution."],
                ["Verjemål", "Tilgangar knytte direkte til rolla som privatperson i Folkeregisteret. Denne rolla kan framleis gi tilgang til tenester som berre finst i den gamle løysinga. Sjå lista i den gamle løysinga."],
            )?,
            area(
                Self::VERGEMAL_BANK,
                AreaGroupConstants::INHABITANT,
                "Bank",
                "Tilgangspakken har følgende undergrupper: Representasjon dagligbank, Ta opp lån/kreditter.",
                "PersonSuit.svg",
                "accesspackage:area:vergemal-bank",
                ["Bank", "The access package has the following sub-groups: Daily bank representation, Take out loans/credits."],
                ["Bank", "Tilgangspakken har følgjande undergrupper: Representasjon daglegbank, Ta opp lån/kredittar."],
            )?,
            area(
                Self::VERGEMAL_INSURANCE_COMPANY,
                AreaGroupConstants::INHABITANT,
                "Forsikringsselskap",
                "Tilgangspakken har følgende undergrupper: Forvalte forsikringsavtaler.",
                "Aksel_Workplace_Buildings2.svg",
                "accesspackage:area:vergemal-forsikringsselskap",
                ["Insurance company", "The access package has the following sub-groups: Manage insurance contracts."],
                ["Forsikringsselskap", "Tilgangspakken har følgjande undergrupper: Forvalta forsikringsavtalar."],
            )?,
            area(
                Self::VERGEMAL_THE_HOUSE_BANK,
                AreaGroupConstants::INHABITANT,
                "Husbanken",
                "Tilgangspakken har følgende undergrupper: Bostøtte, Startlån.",
                "Aksel_Wellness_Hospital.svg",
                "accesspackage:area:vergemal-husbanken",
                ["The house bank", "The access package has the following sub-groups: Housing benefit, Start-up loan."],
                ["Husbanken", "Tilgangspakken har følgjande undergrupper: Bustøtte, Startlån."],
            )?,
            area(
                Self::VERGEMAL_DEBT_COLLECTION_COMPANY,
                AreaGroupConstants::INHABITANT,
                "Inkassoselskap",
                "Tilgangspakken har følgende undergrupper: Forhandle og inngå inkassoavtaler.",
                "Aksel_Wellness_Hospital.svg",
                "accesspackage:area:vergemal-inkassoselskap",
                ["Debt collection company", "The access package has the following sub-groups: Negotiate and enter into debt collection agreements."],
                ["Inkassoselskap", "Tilgangspakken har følgjande undergrupper: Forhandle og inngå inkassoavtalar."],
            )?,
            area(
                Self::VERGEMAL_NORWEGIAN_MAPPING_AUTHORITY,
                AreaGroupConstants::INHABITANT,
                "Kartverket",
                "Tilgangspakken har følgende undergrupper: Salg av fast eiendom/borettslagsandel, Kjøp av eiendom, Arv - privat skifte og uskifte, Endring av eiendom Avtaler og rettigheter Sletting, Låneopptak.",
                "Aksel_Wellness_Hospital.svg",
                "accesspackage:area:vergemal-kartverket",
                ["Norwegian Mapping Authority", "The access package has the following sub-groups: Sale of real estate/housing association share, Purchase of property, Inheritance - private transfer and non-transfer, Change of property Agreements and rights Deletion, Taking out a loan."],
                ["Kartverket", "Tilgangspakken har følgjande undergrupper: Sal av fast eigedom/burettslagsdel, Kjøp av eigedom, Arv - privat skifte og uskifte, Endring av eigedom Avtaler og rettar Sletting, Låneopptak."],
            )?,
            area(
                Self::VERGEMAL_BAILIFF,
                AreaGroupConstants::INHABITANT,
                "Namsmannen",
                "Tilgangspakken har følgende undergrupper: Gjeldsordning, Tvangsfullbyrdelse.",
                "Aksel_Wellness_Hospital.svg",
                "accesspackage:area:vergemal-namsmannen",
                ["Bailiff", "The access package has the following sub-groups: Debt arrangement, Enforcement."],
                ["Namsmannen", "Tilgangspakken har følgjande undergrupper: Gjeldsordning, Tvangsfullbyrdelse."],
            )?,
            area(
                Self::VERGEMAL_TAX_AUTHORITY,
                AreaGroupConstants::INHABITANT,
                "Skatteetaten",
                "Tilgangspakken har følgende undergrupper: Innkreving, Endre postadresse, Melde flytting, Skatt.",
                "Aksel_Wellness_Hospital.svg",
                "accesspackage:area:vergemal-skatteetaten",
                ["The tax authority", "The access package has the following sub-groups: Collection, Change postal address, Report move, Tax."],
                ["Skatteetaten", "Tilgangspakken har følgjande undergrupper: Endre postadresse, Melde flytting, Skatt."],
            )?,
            area(
                Self::VERGEMAL_NORWEGIAN_COLLECTION_CENTER,
                AreaGroupConstants::INHABITANT,
                "Statens Innkrevingssentral",
                "Tilgangspakken har følgende undergrupper: Gjeldsordning og betalingsavtaler.",
                "Aksel_Wellness_Hospital.svg",
                "accesspackage:area:vergemal-statens-innkrevingssentral",
                ["The Norwegian Collection Center", "The access package has the following sub-groups: Debt arrangement and payment agreements."],
                ["Statens innkrevjingssentral", "Tilgangspakken har følgjande undergrupper: Gjeldsordning og betalingsavtalar."],
            )?,
            area(
                Self::VERGEMAL_STATE_ADMINISTRATOR,
                AreaGroupConstants::INHABITANT,
                "Statsforvalteren",
                "Tilgangspakken har følgende undergrupper: Søke om samtykke til disposisjon.",
                "Aksel_Wellness_Hospital.svg",
                "accesspackage:area:vergemal-statsforvalteren",
                ["The State Administrator", "The access package has the following sub-groups: Apply for consent to disposal."],
                ["Statsforvaltaren", "Tilgangspakken har følgjande undergrupper: Søkja om samtykke til disposisjon."],
            )?,
            area(
                Self::VERGEMAL_OTHER_PURCHASES_AND_CONCLUSIONS_OF_AGREEMENTS,
                AreaGroupConstants::INHABITANT,
                "Annen kjøp og avtaleinngåelse",
                "Tilgangspakken har følgende undergrupper: Kjøp/leie av varer og tjenester, Inngåelse av husleiekontrakter, Avslutning av husleiekontrakter, Salg av løsøre av større verdi, Disponere inntekter til å dekke utgifter.",
                "Aksel_Wellness_Hospital.svg",
                "accesspackage:area:vergemal-annen-kjop-avtaleinngaelse",
                ["Other purchases and conclusion of agreements", "The access package has the following sub-groups: Purchase/rental of goods and services, Entering into leases, Termination of leases, Sale of movable property of greater value, Allocating income to cover expenses."],
                ["Anna kjøp og avtaleinngåing", "Tilgangspakken har følgjande undergrupper: Kjøp/leie av varer og tenester, Inngåelse av husleigekontraktar, Avslutning av husleigekontraktar, Salg av lausøyre av større verdi, Disponere inntekter til å dekkja utgifter."],
            )?,
            area(
                Self::VERGEMAL_MUNICIPALITY,
                AreaGroupConstants::INHABITANT,
                "Kommune",
                "Tilgangspakken har følgende undergrupper: Bygg og eiendom, Helse og omsorg, Skatt og avgift, Sosiale tjenester, Skole og utdanning.",
                "Aksel_Wellness_Hospital.svg",
                "accesspackage:area:vergemal-kommune",
                ["Municipality", "The access package has the following sub-groups: Building and property, Health and care, Tax and levy, Social services, School and education."],
                ["Kommune", "Tilgangspakken har følgjande undergrupper: Bygg og eigedom, Helse og omsorg, Skatt og avgift, Sosiale tenester, Skole og utdanning."],
            )?,
            area(
                Self::VERGEMAL_NAV,
                AreaGroupConstants::INHABITANT,
                "NAV",
                "Tilgangspakken har følgende undergrupper: Arbeid, Familie, Hjelpemidler, Pensjon, Sosiale tjenester.",
                "Aksel_Wellness_Hospital.svg",
                "accesspackage:area:vergemal-nav",
                ["NAV", "The access package has the following sub-groups: Work, Family, Aids, Pension, Social services."],
                ["NAV", "Tilgangspakken har følgjande undergrupper: Arbeid, Familie, Hjelpemidler, Pensjon, Sosiale tenester."],
            )?,
            area(
                Self::VERGEMAL_PATIENT_TRAVEL,
                AreaGroupConstants::INHABITANT,
                "Pasientreiser",
                "Tilgangspakken har følgende undergrupper: Refusjon av pasientreiser.",
                "Aksel_Wellness_Hospital.svg",
                "accesspackage:area:vergemal-pasientreiser",
                ["Patient travel", "The access package has the following sub-groups: Work, Family, Aids, Pension, Social services."],
                ["Pasientreiser", "Tilgangspakken har følgjande undergrupper: Refusjon av pasientreiser."],
            )?,
            area(
                Self::VERGEMAL_PATIENT_INFORMATION_AND_SERVICES,
                AreaGroupConstants::INHABITANT,
                "Pasientopplysninger og -tjenester",
                "Tilgangspakken har følgende undergrupper: HelseNorge (gjelder ikke Helse Midt), Helsami (gjelder Helse Midt), Full tilgang til Helsami, Lesetilgang til Helsami, Bare kommunisere, Kommune (gjelder pasient og helseopplysninger hos kommuner).",
                "Aksel_Wellness_Hospital.svg",
                "accesspackage:area:vergemal-pasientopplysninger-tjenester",
                ["Patient information and services", "The access package has the following sub-groups: HelseNorge (does not apply to Helse Midt), Helsami (applies to Helse Midt), Full access to Helsami, Read access to Helsami, Only communicate, Municipality (applies to patient and health information at municipalities)."],
                ["Pasientopplysningar og -tenester", "Tilgangspakken har følgjande undergrupper: Helsenoreg (gjeld ikkje Helse Midt), *Helsami (gjeld Helse Midt), Full tilgang til *Helsami, Lesetilgang til *Helsami, Berre kommunisera, Kommune (gjeld pasient og helseopplysningar hos kommunar)."],
            )?,
        ])
    }
}

impl ConstantFamily for AreaConstants {
    fn registry() -> &'static FamilyRegistry<Area> {
        static REGISTRY: FamilyRegistry<Area> = FamilyRegistry::new();
        &REGISTRY
    }
}
