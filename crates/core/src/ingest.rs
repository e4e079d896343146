//! Normalization of backend records into canonical structs.
//!
//! The dashboard receives records in two historical shapes: the legacy
//! sample shape (camelCase Spanish keys) and the live backend shape
//! (snake_case Spanish keys). Both, plus the canonical English keys, are
//! accepted here. Every canonical field has an ordered key list; the first
//! key holding a truthy value wins, so an empty string or `0` under one key
//! falls through to the next.
//!
//! This is the only place that knows about the alternative key names. Code
//! downstream sees a single [`Project`] / [`Milestone`] / [`Ticket`] shape.

use serde_json::{Map, Value};

use crate::cases::{CaseComment, Pqr, Ticket};
use crate::error::CoreError;
use crate::lifecycle;
use crate::milestones::{Document, Milestone, UserRef};
use crate::project::Project;
use crate::types::{CatalogId, DbId, StateId};

type Object = Map<String, Value>;

// ---------------------------------------------------------------------------
// Key tables
// ---------------------------------------------------------------------------

const PROJECT_ID_KEYS: &[&str] = &["id", "codigo", "codigo_proyecto", "codigoProyecto"];
const PROJECT_NAME_KEYS: &[&str] = &["name", "nombre", "nombre_proyecto", "nombreProyecto"];
const CLIENT_NAME_KEYS: &[&str] = &["client_name", "cliente", "nombre_cliente", "clienteNombre"];
const CITY_KEYS: &[&str] = &["city", "ciudad", "municipio"];
const STATE_KEYS: &[&str] = &[
    "current_state_id",
    "estado_actual_id",
    "estado_id",
    "estadoId",
    "estado",
];
const ESTIMATED_COMPLETION_KEYS: &[&str] = &[
    "estimated_completion_date",
    "fecha_estimada_fin",
    "fechaEstimadaFinalizacion",
];

/// Accepted keys for the entered date of each progress state.
const ENTERED_DATE_KEYS: &[(StateId, &[&str])] = &[
    (
        lifecycle::STATE_STARTED,
        &["start_date", "fecha_inicio", "fechaInicio"],
    ),
    (
        lifecycle::STATE_APPLICATION_SUBMITTED,
        &[
            "application_submitted_date",
            "fecha_radicacion",
            "fechaRadicacion",
        ],
    ),
    (
        lifecycle::STATE_TECHNICAL_REVIEW,
        &[
            "technical_review_date",
            "fecha_revision_tecnica",
            "fechaRevisionTecnica",
        ],
    ),
    (
        lifecycle::STATE_OPERATOR_APPROVAL,
        &[
            "operator_approval_date",
            "fecha_aprobacion",
            "fechaAprobacion",
        ],
    ),
    (
        lifecycle::STATE_EQUIPMENT_PURCHASE,
        &[
            "equipment_purchase_date",
            "fecha_compra_equipos",
            "fechaCompraEquipos",
        ],
    ),
    (
        lifecycle::STATE_INSTALLATION,
        &["installation_date", "fecha_instalacion", "fechaInstalacion"],
    ),
    (
        lifecycle::STATE_INSPECTION_REQUESTED,
        &[
            "inspection_request_date",
            "fecha_solicitud_inspeccion",
            "fechaSolicitudInspeccion",
        ],
    ),
    (
        lifecycle::STATE_INSPECTION,
        &["inspection_date", "fecha_inspeccion", "fechaInspeccion"],
    ),
    (
        lifecycle::STATE_METER_INSTALLATION,
        &[
            "meter_installation_date",
            "fecha_instalacion_medidor",
            "fechaInstalacionMedidor",
        ],
    ),
    (
        lifecycle::STATE_COMMISSIONING,
        &[
            "commissioning_date",
            "fecha_puesta_servicio",
            "fechaPuestaServicio",
        ],
    ),
    (
        lifecycle::STATE_CONNECTED,
        &["connection_date", "fecha_conexion", "fechaConexion"],
    ),
];

const MILESTONE_ID_KEYS: &[&str] = &["id", "hito_id", "hitoId"];
const MILESTONE_TYPE_KEYS: &[&str] = &["type_id", "tipo_id", "tipoId", "tipo"];
const MILESTONE_DATE_KEYS: &[&str] = &["date", "fecha", "fecha_hito"];
const MILESTONE_TITLE_KEYS: &[&str] = &["title", "titulo"];
const MILESTONE_DESCRIPTION_KEYS: &[&str] = &["description", "descripcion"];
const MILESTONE_RESPONSIBLE_KEYS: &[&str] = &[
    "responsible",
    "responsable_id",
    "responsableId",
    "responsable",
];
const MILESTONE_PARTICIPANT_KEYS: &[&str] = &["participants", "participantes"];
const MILESTONE_DOCUMENT_KEYS: &[&str] = &["documents", "documentos"];
const MILESTONE_NOTES_KEYS: &[&str] = &["notes", "notas", "observaciones"];

const DOCUMENT_ID_KEYS: &[&str] = &["id", "documento_id", "documentoId"];
const DOCUMENT_TYPE_KEYS: &[&str] = &[
    "type_id",
    "tipo_documento_id",
    "tipoDocumentoId",
    "tipo_id",
];
const DOCUMENT_NAME_KEYS: &[&str] = &["name", "nombre", "nombre_archivo", "nombreArchivo"];
const DOCUMENT_SIZE_KEYS: &[&str] = &["size", "tamano", "tamanio"];
const DOCUMENT_UPLOADED_KEYS: &[&str] = &[
    "uploaded_date",
    "fecha_carga",
    "fechaCarga",
    "created_at",
];
const DOCUMENT_STORAGE_KEYS: &[&str] = &["storage_ref", "url", "ruta_archivo", "rutaArchivo"];

const USER_ID_KEYS: &[&str] = &["id", "usuario_id", "usuarioId"];
const USER_NAME_KEYS: &[&str] = &["name", "nombre", "nombre_completo", "nombreCompleto"];

const CASE_ID_KEYS: &[&str] = &["id", "ticket_id", "pqr_id", "radicado"];
const CASE_TYPE_KEYS: &[&str] = &["type_id", "tipo_id", "tipoId", "tipo"];
const CASE_STATUS_KEYS: &[&str] = &["status_id", "estado_id", "estadoId", "estado"];
const CASE_PRIORITY_KEYS: &[&str] = &[
    "priority_id",
    "prioridad_id",
    "prioridadId",
    "prioridad",
];
const CASE_SUBJECT_KEYS: &[&str] = &["subject", "asunto", "titulo"];
const CASE_DESCRIPTION_KEYS: &[&str] = &["description", "descripcion"];
const CASE_PROJECT_KEYS: &[&str] = &[
    "project_id",
    "proyecto_id",
    "proyectoId",
    "codigo_proyecto",
];
const CASE_CLIENT_KEYS: &[&str] = &["client_id", "cliente_id", "clienteId", "cliente"];
const CASE_COMMENT_KEYS: &[&str] = &["comments", "comentarios"];
const CASE_ATTACHMENT_KEYS: &[&str] = &["attachments", "adjuntos"];

const COMMENT_AUTHOR_KEYS: &[&str] = &["author", "autor_id", "usuario_id", "autor"];
const COMMENT_DATE_KEYS: &[&str] = &["date", "fecha", "created_at"];
const COMMENT_TEXT_KEYS: &[&str] = &["text", "texto", "comentario", "mensaje"];
const ATTACHMENT_NAME_KEYS: &[&str] = &["url", "nombre", "name", "ruta_archivo"];

/// Keys consulted when a nested object stands in for a scalar.
const NESTED_NAME_KEYS: &[&str] = &["name", "nombre"];
const NESTED_ID_KEYS: &[&str] = &["id"];

// ---------------------------------------------------------------------------
// Public entry points
// ---------------------------------------------------------------------------

/// Normalize one project record.
///
/// Fails only when the record is not a JSON object or carries no id.
pub fn normalize_project(value: &Value) -> Result<Project, CoreError> {
    let obj = as_object(value, "project")?;

    let id = pick_string(obj, PROJECT_ID_KEYS)
        .ok_or_else(|| missing_id("project", PROJECT_ID_KEYS))?;

    let mut project = Project::new(id);
    project.name = pick_string(obj, PROJECT_NAME_KEYS);
    project.client_name = pick_string(obj, CLIENT_NAME_KEYS);
    project.city = pick_string(obj, CITY_KEYS);
    project.current_state_id = pick_catalog_id(obj, STATE_KEYS);
    project.estimated_completion_date = pick_string(obj, ESTIMATED_COMPLETION_KEYS);

    for (state_id, keys) in ENTERED_DATE_KEYS {
        if let Some(slot) = project.entered_date_mut(*state_id) {
            *slot = pick_string(obj, keys);
        }
    }

    Ok(project)
}

/// Normalize one milestone record, including its attached documents.
pub fn normalize_milestone(value: &Value) -> Result<Milestone, CoreError> {
    let obj = as_object(value, "milestone")?;

    let id = pick_i64(obj, MILESTONE_ID_KEYS)
        .ok_or_else(|| missing_id("milestone", MILESTONE_ID_KEYS))?;

    let documents = pick_array(obj, MILESTONE_DOCUMENT_KEYS)
        .iter()
        .map(normalize_document)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Milestone {
        id,
        type_id: pick_catalog_id(obj, MILESTONE_TYPE_KEYS).unwrap_or_default(),
        date: pick_string(obj, MILESTONE_DATE_KEYS),
        title: pick_string(obj, MILESTONE_TITLE_KEYS).unwrap_or_default(),
        description: pick_string(obj, MILESTONE_DESCRIPTION_KEYS),
        responsible: pick_i64(obj, MILESTONE_RESPONSIBLE_KEYS),
        participants: pick_id_list(obj, MILESTONE_PARTICIPANT_KEYS),
        documents,
        notes: pick_string(obj, MILESTONE_NOTES_KEYS),
    })
}

/// Normalize one document record. A missing id becomes `0`.
pub fn normalize_document(value: &Value) -> Result<Document, CoreError> {
    let obj = as_object(value, "document")?;

    Ok(Document {
        id: pick_i64(obj, DOCUMENT_ID_KEYS).unwrap_or_default(),
        type_id: pick_catalog_id(obj, DOCUMENT_TYPE_KEYS).unwrap_or_default(),
        name: pick_string(obj, DOCUMENT_NAME_KEYS).unwrap_or_default(),
        size: pick_i64(obj, DOCUMENT_SIZE_KEYS).and_then(|s| u64::try_from(s).ok()),
        uploaded_date: pick_string(obj, DOCUMENT_UPLOADED_KEYS),
        storage_ref: pick_string(obj, DOCUMENT_STORAGE_KEYS),
    })
}

/// Normalize one user directory entry.
pub fn normalize_user(value: &Value) -> Result<UserRef, CoreError> {
    let obj = as_object(value, "user")?;

    let id = pick_i64(obj, USER_ID_KEYS).ok_or_else(|| missing_id("user", USER_ID_KEYS))?;
    Ok(UserRef {
        id,
        name: pick_string(obj, USER_NAME_KEYS).unwrap_or_default(),
    })
}

/// Normalize one support ticket.
///
/// Cases only feed counts, so every field is optional: a missing or null
/// value takes its default and the record still counts.
pub fn normalize_ticket(value: &Value) -> Result<Ticket, CoreError> {
    let obj = as_object(value, "ticket")?;

    Ok(Ticket {
        id: pick_i64(obj, CASE_ID_KEYS).unwrap_or_default(),
        type_id: pick_catalog_id(obj, CASE_TYPE_KEYS).unwrap_or_default(),
        status_id: pick_catalog_id(obj, CASE_STATUS_KEYS).unwrap_or_default(),
        priority_id: pick_catalog_id(obj, CASE_PRIORITY_KEYS).unwrap_or_default(),
        subject: pick_string(obj, CASE_SUBJECT_KEYS).unwrap_or_default(),
        description: pick_string(obj, CASE_DESCRIPTION_KEYS),
        project_id: pick_string(obj, CASE_PROJECT_KEYS),
        client_id: pick_i64(obj, CASE_CLIENT_KEYS),
        comments: pick_comments(obj),
        attachments: pick_attachments(obj),
    })
}

/// Normalize one PQR, with the same leniency as [`normalize_ticket`].
pub fn normalize_pqr(value: &Value) -> Result<Pqr, CoreError> {
    let obj = as_object(value, "pqr")?;

    Ok(Pqr {
        id: pick_i64(obj, CASE_ID_KEYS).unwrap_or_default(),
        type_id: pick_catalog_id(obj, CASE_TYPE_KEYS).unwrap_or_default(),
        status_id: pick_catalog_id(obj, CASE_STATUS_KEYS).unwrap_or_default(),
        subject: pick_string(obj, CASE_SUBJECT_KEYS).unwrap_or_default(),
        description: pick_string(obj, CASE_DESCRIPTION_KEYS),
        project_id: pick_string(obj, CASE_PROJECT_KEYS),
        client_id: pick_i64(obj, CASE_CLIENT_KEYS),
        comments: pick_comments(obj),
        attachments: pick_attachments(obj),
    })
}

/// Comments that are not objects are skipped.
fn pick_comments(obj: &Object) -> Vec<CaseComment> {
    pick_array(obj, CASE_COMMENT_KEYS)
        .iter()
        .filter_map(Value::as_object)
        .map(|c| CaseComment {
            author: pick_i64(c, COMMENT_AUTHOR_KEYS),
            date: pick_string(c, COMMENT_DATE_KEYS),
            text: pick_string(c, COMMENT_TEXT_KEYS).unwrap_or_default(),
        })
        .collect()
}

/// Attachments are references; objects contribute their url or file name.
fn pick_attachments(obj: &Object) -> Vec<String> {
    pick_array(obj, CASE_ATTACHMENT_KEYS)
        .iter()
        .filter_map(|v| match v {
            Value::Object(inner) => pick_string(inner, ATTACHMENT_NAME_KEYS),
            other => leaf_string(other).filter(|s| !s.is_empty()),
        })
        .collect()
}

/// Normalize a list of records with `f`, stopping at the first failure.
///
/// The error message is prefixed with the index of the offending record.
pub fn normalize_all<T>(
    values: &[Value],
    f: impl Fn(&Value) -> Result<T, CoreError>,
) -> Result<Vec<T>, CoreError> {
    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            f(v).map_err(|CoreError::Validation(msg)| {
                CoreError::Validation(format!("record {i}: {msg}"))
            })
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn as_object<'a>(value: &'a Value, entity: &str) -> Result<&'a Object, CoreError> {
    value
        .as_object()
        .ok_or_else(|| CoreError::Validation(format!("{entity} record must be a JSON object")))
}

fn missing_id(entity: &str, keys: &[&str]) -> CoreError {
    CoreError::Validation(format!(
        "{entity} record has no id. Expected one of: {}",
        keys.join(", ")
    ))
}

/// Truthiness as the dashboard's record shapes use it: null, `false`, `0`
/// and blank strings are absent.
fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.trim().is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// First value among `keys` that is present and survives `convert`.
///
/// A present value that does not convert (a state name where an id is
/// expected, a nested object without an id) does not stop the search.
fn pick_map<'a, T>(
    obj: &'a Object,
    keys: &[&str],
    convert: impl Fn(&'a Value) -> Option<T>,
) -> Option<T> {
    keys.iter()
        .filter_map(|k| obj.get(*k))
        .filter(|v| is_present(v))
        .find_map(convert)
}

fn pick_string(obj: &Object, keys: &[&str]) -> Option<String> {
    pick_map(obj, keys, scalar_string)
}

fn scalar_string(value: &Value) -> Option<String> {
    match value {
        Value::Object(inner) => pick_map(inner, NESTED_NAME_KEYS, leaf_string),
        other => leaf_string(other),
    }
}

fn leaf_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn pick_i64(obj: &Object, keys: &[&str]) -> Option<i64> {
    pick_map(obj, keys, scalar_i64)
}

fn scalar_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        Value::Object(inner) => pick_map(inner, NESTED_ID_KEYS, scalar_i64),
        _ => None,
    }
}

fn pick_catalog_id(obj: &Object, keys: &[&str]) -> Option<CatalogId> {
    pick_map(obj, keys, |v| scalar_i64(v).and_then(|id| CatalogId::try_from(id).ok()))
}

fn pick_array<'a>(obj: &'a Object, keys: &[&str]) -> &'a [Value] {
    pick_map(obj, keys, |v| v.as_array().map(Vec::as_slice)).unwrap_or_default()
}

fn pick_id_list(obj: &Object, keys: &[&str]) -> Vec<DbId> {
    pick_array(obj, keys).iter().filter_map(scalar_i64).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde_json::json;

    use super::*;

    // -- normalize_project ------------------------------------------------

    #[test]
    fn canonical_shape_round_trips() {
        let value = json!({
            "id": "SOL-2025-001",
            "name": "Finca El Sol",
            "current_state_id": 7,
            "start_date": "2025-01-10",
            "inspection_request_date": "2025-06-01",
            "estimated_completion_date": "2025-09-30"
        });
        let p = normalize_project(&value).unwrap();
        assert_eq!(p.id, "SOL-2025-001");
        assert_eq!(p.name.as_deref(), Some("Finca El Sol"));
        assert_eq!(p.current_state_id, Some(7));
        assert_eq!(p.entered_date(7), Some("2025-06-01"));
        assert_eq!(p.estimated_completion_date.as_deref(), Some("2025-09-30"));
    }

    #[test]
    fn live_backend_shape() {
        let value = json!({
            "codigo_proyecto": "SOL-77",
            "nombre_proyecto": "Bodega Norte",
            "cliente": { "id": 3, "nombre": "Agro SAS" },
            "estado_actual_id": "4",
            "fecha_inicio": "2025-02-01",
            "fecha_aprobacion": "2025-04-01T08:00:00Z",
            "fecha_estimada_fin": "2025-08-01"
        });
        let p = normalize_project(&value).unwrap();
        assert_eq!(p.id, "SOL-77");
        assert_eq!(p.client_name.as_deref(), Some("Agro SAS"));
        assert_eq!(p.current_state_id, Some(4));
        assert_eq!(p.operator_approval_date.as_deref(), Some("2025-04-01T08:00:00Z"));
        assert_eq!(p.start_date.as_deref(), Some("2025-02-01"));
    }

    #[test]
    fn legacy_sample_shape() {
        let value = json!({
            "codigo": 1042,
            "nombre": "Casa Campestre",
            "estadoId": 11,
            "fechaInicio": "2024-11-02",
            "fechaConexion": "2025-03-15",
            "fechaEstimadaFinalizacion": "2025-03-01"
        });
        let p = normalize_project(&value).unwrap();
        assert_eq!(p.id, "1042");
        assert_eq!(p.current_state_id, Some(11));
        assert_eq!(p.connection_date.as_deref(), Some("2025-03-15"));
        assert_eq!(p.estimated_completion_date.as_deref(), Some("2025-03-01"));
    }

    #[test]
    fn empty_values_fall_through_to_later_keys() {
        let value = json!({
            "id": "",
            "codigo": "SOL-5",
            "current_state_id": 0,
            "estado_id": 3,
            "start_date": null,
            "fecha_inicio": "2025-01-01"
        });
        let p = normalize_project(&value).unwrap();
        assert_eq!(p.id, "SOL-5");
        assert_eq!(p.current_state_id, Some(3));
        assert_eq!(p.start_date.as_deref(), Some("2025-01-01"));
    }

    #[test]
    fn missing_id_is_rejected() {
        let err = normalize_project(&json!({"nombre": "Sin código"})).unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) if msg.contains("no id"));
    }

    #[test]
    fn non_object_is_rejected() {
        assert_matches!(
            normalize_project(&json!(["SOL-1"])),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn out_of_range_state_is_dropped() {
        let p = normalize_project(&json!({"id": "SOL-1", "estado_id": 70000})).unwrap();
        assert_eq!(p.current_state_id, None);
    }

    // -- normalize_milestone ----------------------------------------------

    #[test]
    fn milestone_with_documents_and_participants() {
        let value = json!({
            "hito_id": "12",
            "tipo_id": 4,
            "fecha": "2025-05-20",
            "titulo": "Visita técnica inicial",
            "responsable": { "id": 8, "nombre": "Ana" },
            "participantes": [8, "9", { "id": 10 }],
            "documentos": [
                { "id": 1, "tipo_documento_id": 6, "nombre_archivo": "foto.jpg", "tamano": 2048 },
                { "nombre": "acta.pdf" }
            ]
        });
        let m = normalize_milestone(&value).unwrap();
        assert_eq!(m.id, 12);
        assert_eq!(m.type_id, 4);
        assert_eq!(m.title, "Visita técnica inicial");
        assert_eq!(m.responsible, Some(8));
        assert_eq!(m.participants, vec![8, 9, 10]);
        assert_eq!(m.documents.len(), 2);
        assert_eq!(m.documents[0].size, Some(2048));
        assert_eq!(m.documents[1].id, 0);
        assert_eq!(m.documents[1].type_id, 0);
    }

    #[test]
    fn milestone_without_documents_field() {
        let m = normalize_milestone(&json!({"id": 1, "title": "Contrato"})).unwrap();
        assert!(m.documents.is_empty());
        assert!(m.participants.is_empty());
    }

    #[test]
    fn milestone_without_id_is_rejected() {
        assert_matches!(
            normalize_milestone(&json!({"titulo": "?"})),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn unconvertible_value_falls_through_to_later_keys() {
        let value = json!({
            "id": "SOL-8",
            "estado_id": "Instalación",
            "estadoId": 6,
            "cliente": { "id": 3 },
            "clienteNombre": "Agro SAS"
        });
        let p = normalize_project(&value).unwrap();
        assert_eq!(p.current_state_id, Some(6));
        assert_eq!(p.client_name.as_deref(), Some("Agro SAS"));
    }

    #[test]
    fn nested_responsible_without_id_falls_through() {
        let value = json!({
            "id": 2,
            "responsable_id": { "nombre": "Ana" },
            "responsable": 8
        });
        let m = normalize_milestone(&value).unwrap();
        assert_eq!(m.responsible, Some(8));
    }

    // -- normalize_ticket / normalize_pqr ---------------------------------

    #[test]
    fn ticket_null_fields_take_defaults() {
        let value = json!({
            "id": 1,
            "status_id": 1,
            "priority_id": null,
            "subject": null,
            "comments": null,
            "attachments": null
        });
        let t = normalize_ticket(&value).unwrap();
        assert_eq!(t.id, 1);
        assert_eq!(t.status_id, 1);
        assert_eq!(t.priority_id, 0);
        assert_eq!(t.subject, "");
        assert!(t.comments.is_empty());
        assert!(t.attachments.is_empty());
    }

    #[test]
    fn ticket_with_spanish_keys_and_comments() {
        let value = json!({
            "ticket_id": 30,
            "tipo_id": 2,
            "estado_id": 4,
            "prioridad_id": 3,
            "asunto": "Panel fisurado",
            "proyecto_id": "SOL-77",
            "comentarios": [
                { "autor_id": 8, "fecha": "2025-06-02", "texto": "Se agenda visita" },
                "texto suelto"
            ],
            "adjuntos": ["foto1.jpg", { "url": "s3://fotos/2.jpg" }, null]
        });
        let t = normalize_ticket(&value).unwrap();
        assert_eq!(t.id, 30);
        assert_eq!((t.type_id, t.status_id, t.priority_id), (2, 4, 3));
        assert_eq!(t.subject, "Panel fisurado");
        assert_eq!(t.project_id.as_deref(), Some("SOL-77"));
        assert_eq!(t.comments.len(), 1);
        assert_eq!(t.comments[0].author, Some(8));
        assert_eq!(t.comments[0].text, "Se agenda visita");
        assert_eq!(t.attachments, vec!["foto1.jpg", "s3://fotos/2.jpg"]);
    }

    #[test]
    fn pqr_without_id_still_normalizes() {
        let p = normalize_pqr(&json!({"tipo_id": 2, "estado_id": null})).unwrap();
        assert_eq!(p.id, 0);
        assert_eq!(p.type_id, 2);
        assert_eq!(p.status_id, 0);
    }

    #[test]
    fn non_object_case_is_rejected() {
        assert_matches!(
            normalize_ticket(&json!("T-1")),
            Err(CoreError::Validation(_))
        );
    }

    // -- normalize_user / normalize_all -----------------------------------

    #[test]
    fn user_with_spanish_keys() {
        let value = json!({"usuario_id": 4, "nombre_completo": "Luis Pérez"});
        let u = normalize_user(&value).unwrap();
        assert_eq!(
            u,
            UserRef {
                id: 4,
                name: "Luis Pérez".into()
            }
        );
    }

    #[test]
    fn normalize_all_reports_record_index() {
        let values = vec![json!({"id": "A"}), json!(5)];
        let err = normalize_all(&values, normalize_project).unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) if msg.starts_with("record 1:"));
    }
}
