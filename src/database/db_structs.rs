use crate::model::structures::discipline_type::DisciplineType;
use serde::{Deserialize, Serialize};

// Field renames follow the collaborator's wire and column names.

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tournament {
    pub id: i32,
    #[serde(rename = "nombre")]
    pub name: String
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: i32,
    #[serde(rename = "nombre")]
    pub name: String
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: i32,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "categoria_id")]
    pub category_id: i32
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Discipline {
    pub id: i32,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "tipo")]
    pub discipline_type: DisciplineType,
    /// Points for first place; also the key into the points table
    #[serde(rename = "valor_puntos")]
    pub max_points: i32
}

/// The instance of an individual discipline that results are recorded against
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Competition {
    pub id: i32,
    #[serde(rename = "disciplina_id")]
    pub discipline_id: i32
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamResult {
    #[serde(rename = "equipo_id")]
    pub team_id: i32,
    #[serde(rename = "competencia_id")]
    pub competition_id: i32,
    #[serde(rename = "resultado_equipo")]
    pub team_result: Option<i32>
}

/// One recorded match entry of a collective discipline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectiveScore {
    #[serde(rename = "equipo_id")]
    pub team_id: i32,
    #[serde(rename = "disciplina_id")]
    pub discipline_id: i32,
    /// NULL counts as 0 when summed
    #[serde(rename = "puntaje_por_equipo")]
    pub points_for_team: Option<i32>
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtraScore {
    #[serde(rename = "equipo_id")]
    pub team_id: i32,
    #[serde(rename = "inauguracion")]
    pub opening: i32,
    #[serde(rename = "adicional")]
    pub additional: i32
}

impl ExtraScore {
    pub fn zeroed(team_id: i32) -> ExtraScore {
        ExtraScore {
            team_id,
            opening: 0,
            additional: 0
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointsConfig {
    #[serde(rename = "puntaje_primer_puesto")]
    pub first_place_points: i32
}
