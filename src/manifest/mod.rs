mod types;

pub use types::{Category, FileManifest};

/// The historical set of Minerva files this tool relocates.
///
/// The list is fixed: it names every Markdown and SQL file that accumulated
/// at the project root before the docs/ folder existed. Entries already
/// moved by an earlier run are reported as not found, which is expected.
pub fn default_manifest() -> FileManifest {
    FileManifest {
        documents: vec![
            "ARQUITETURA.md".to_string(),
            "DEPLOY.md".to_string(),
            "SETUP-SUPABASE.md".to_string(),
            "FLUXO-OS.md".to_string(),
            "INTEGRACAO-CORA.md".to_string(),
            "MODULO-COLABORADOR.md".to_string(),
            "CALCULOS-PRECIFICACAO.md".to_string(),
            "AUDITORIA.md".to_string(),
            "GERACAO-PDF.md".to_string(),
            "TROUBLESHOOTING.md".to_string(),
        ],
        scripts: vec![
            "schema-os-etapas.sql".to_string(),
            "fix-rls-policies.sql".to_string(),
            "seed-dados-teste.sql".to_string(),
            "migracao-leads.sql".to_string(),
            "triggers-auditoria.sql".to_string(),
            "indices-agenda.sql".to_string(),
        ],
    }
}
