//! Milestone and document type catalogs.
//!
//! Lookups never fail: unknown ids resolve to fixed fallback values that the
//! dashboard shows as-is, so the fallbacks are part of the display contract.

use serde::Serialize;

use crate::types::CatalogId;

// ---------------------------------------------------------------------------
// Fallbacks
// ---------------------------------------------------------------------------

pub const FALLBACK_MILESTONE_NAME: &str = "Evento";
pub const FALLBACK_MILESTONE_ICON: &str = "📌";
pub const FALLBACK_MILESTONE_COLOR: &str = "#94a3b8";

pub const FALLBACK_DOCUMENT_NAME: &str = "Documento";
pub const FALLBACK_DOCUMENT_ICON: &str = "📄";

// ---------------------------------------------------------------------------
// Structs
// ---------------------------------------------------------------------------

/// Category of a recorded project event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MilestoneType {
    pub id: CatalogId,
    pub name: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
}

/// Category of an uploaded document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DocumentType {
    pub id: CatalogId,
    pub name: &'static str,
    pub icon: &'static str,
}

/// A type lookup result with the fallbacks already applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedType {
    /// The id as requested, which may lie outside the catalog id range.
    pub id: i64,
    pub name: &'static str,
    pub icon: &'static str,
    pub color: Option<&'static str>,
    /// `false` when the id was not in the catalog and fallbacks were used.
    pub known: bool,
}

// ---------------------------------------------------------------------------
// Catalogs
// ---------------------------------------------------------------------------

pub const MILESTONE_TYPES: &[MilestoneType] = &[
    MilestoneType {
        id: 1,
        name: "Contrato firmado",
        icon: "📝",
        color: "#3b82f6",
    },
    MilestoneType {
        id: 2,
        name: "Documento enviado",
        icon: "📤",
        color: "#8b5cf6",
    },
    MilestoneType {
        id: 3,
        name: "Respuesta del operador",
        icon: "📨",
        color: "#06b6d4",
    },
    MilestoneType {
        id: 4,
        name: "Visita técnica",
        icon: "🔧",
        color: "#f59e0b",
    },
    MilestoneType {
        id: 5,
        name: "Inspección",
        icon: "🔍",
        color: "#f97316",
    },
    MilestoneType {
        id: 6,
        name: "Instalación",
        icon: "⚡",
        color: "#eab308",
    },
    MilestoneType {
        id: 7,
        name: "Reunión con cliente",
        icon: "🤝",
        color: "#10b981",
    },
    MilestoneType {
        id: 8,
        name: "Pago recibido",
        icon: "💰",
        color: "#22c55e",
    },
    MilestoneType {
        id: 9,
        name: "Observación",
        icon: "⚠️",
        color: "#ef4444",
    },
    MilestoneType {
        id: 10,
        name: "Conexión a la red",
        icon: "🔌",
        color: "#16a34a",
    },
];

pub const DOCUMENT_TYPES: &[DocumentType] = &[
    DocumentType {
        id: 1,
        name: "Contrato",
        icon: "📝",
    },
    DocumentType {
        id: 2,
        name: "Factura",
        icon: "🧾",
    },
    DocumentType {
        id: 3,
        name: "Plano eléctrico",
        icon: "📐",
    },
    DocumentType {
        id: 4,
        name: "Memoria de cálculo",
        icon: "🧮",
    },
    DocumentType {
        id: 5,
        name: "Certificado RETIE",
        icon: "📜",
    },
    DocumentType {
        id: 6,
        name: "Registro fotográfico",
        icon: "📷",
    },
    DocumentType {
        id: 7,
        name: "Formulario de solicitud",
        icon: "📋",
    },
    DocumentType {
        id: 8,
        name: "Acta de inspección",
        icon: "✅",
    },
    DocumentType {
        id: 9,
        name: "Póliza",
        icon: "🛡️",
    },
];

// ---------------------------------------------------------------------------
// Milestone type lookups
// ---------------------------------------------------------------------------

pub fn find_milestone_type(id: CatalogId) -> Option<&'static MilestoneType> {
    MILESTONE_TYPES.iter().find(|t| t.id == id)
}

pub fn milestone_type_name(id: CatalogId) -> &'static str {
    find_milestone_type(id).map_or(FALLBACK_MILESTONE_NAME, |t| t.name)
}

pub fn milestone_type_icon(id: CatalogId) -> &'static str {
    find_milestone_type(id).map_or(FALLBACK_MILESTONE_ICON, |t| t.icon)
}

pub fn milestone_type_color(id: CatalogId) -> &'static str {
    find_milestone_type(id).map_or(FALLBACK_MILESTONE_COLOR, |t| t.color)
}

/// Resolve a raw id; ids too large for a catalog id are simply unknown.
pub fn resolve_milestone_type(id: i64) -> ResolvedType {
    match CatalogId::try_from(id).ok().and_then(find_milestone_type) {
        Some(t) => ResolvedType {
            id,
            name: t.name,
            icon: t.icon,
            color: Some(t.color),
            known: true,
        },
        None => ResolvedType {
            id,
            name: FALLBACK_MILESTONE_NAME,
            icon: FALLBACK_MILESTONE_ICON,
            color: Some(FALLBACK_MILESTONE_COLOR),
            known: false,
        },
    }
}

// ---------------------------------------------------------------------------
// Document type lookups
// ---------------------------------------------------------------------------

pub fn find_document_type(id: CatalogId) -> Option<&'static DocumentType> {
    DOCUMENT_TYPES.iter().find(|t| t.id == id)
}

pub fn document_type_name(id: CatalogId) -> &'static str {
    find_document_type(id).map_or(FALLBACK_DOCUMENT_NAME, |t| t.name)
}

pub fn document_type_icon(id: CatalogId) -> &'static str {
    find_document_type(id).map_or(FALLBACK_DOCUMENT_ICON, |t| t.icon)
}

pub fn resolve_document_type(id: i64) -> ResolvedType {
    let found = CatalogId::try_from(id).ok().and_then(find_document_type);
    ResolvedType {
        id,
        name: found.map_or(FALLBACK_DOCUMENT_NAME, |t| t.name),
        icon: found.map_or(FALLBACK_DOCUMENT_ICON, |t| t.icon),
        color: None,
        known: found.is_some(),
    }
}
