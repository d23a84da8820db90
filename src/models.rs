use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Meal {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl Meal {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
            Self::Snack => "snack",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Frequency {
    #[default]
    Daily,
    Weekly,
    AsNeeded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
}

impl TimeOfDay {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Morning => "morning",
            Self::Afternoon => "afternoon",
            Self::Evening => "evening",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DrinkType {
    #[default]
    Water,
    Coffee,
    Tea,
    Juice,
    Other,
}

/// One logged food item. Never mutated in place: replaced or removed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodEntry {
    pub id: String,
    pub name: String,
    pub calories: u32,
    pub protein: u32,
    pub carbs: u32,
    pub fat: u32,
    pub meal: Meal,
    pub logged_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Supplement {
    pub id: String,
    pub name: String,
    pub dosage: String,
    pub frequency: Frequency,
    /// Empty set means the supplement can be taken anytime.
    #[serde(default)]
    pub time_of_day: Vec<TimeOfDay>,
    pub taken: bool,
    /// Stamped when `taken` flips to true; preserved when it flips back.
    #[serde(default)]
    pub last_taken: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HydrationEntry {
    pub id: String,
    /// Liters, strictly positive.
    pub amount: f64,
    pub time: DateTime<Utc>,
    #[serde(default)]
    pub drink: DrinkType,
}

/// The per-user hydration blob: the entry log plus its own goal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HydrationLog {
    #[serde(default)]
    pub entries: Vec<HydrationEntry>,
    pub goal: f64,
}

impl Default for HydrationLog {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            goal: 2.5,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct NutritionGoals {
    pub calories: u32,
    pub protein: u32,
    pub carbs: u32,
    pub fat: u32,
}

impl Default for NutritionGoals {
    fn default() -> Self {
        Self {
            calories: 2000,
            protein: 150,
            carbs: 200,
            fat: 65,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Profile {
    #[serde(default)]
    pub nutrition_goals: NutritionGoals,
}

// --- request bodies ---

#[derive(Debug, Serialize, Deserialize)]
pub struct NewFood {
    pub name: String,
    pub calories: u32,
    #[serde(default)]
    pub protein: u32,
    #[serde(default)]
    pub carbs: u32,
    #[serde(default)]
    pub fat: u32,
    pub meal: Meal,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct NewSupplement {
    pub name: String,
    pub dosage: String,
    #[serde(default)]
    pub frequency: Frequency,
    #[serde(default)]
    pub time_of_day: Vec<TimeOfDay>,
}

/// Partial update for a supplement. Only supplied fields change; the server
/// stamps `last_taken` when `taken` arrives as true.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct SupplementUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dosage: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency: Option<Frequency>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_of_day: Option<Vec<TimeOfDay>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub taken: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct NewHydration {
    pub amount: f64,
    #[serde(default)]
    pub drink: DrinkType,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GoalUpdate {
    pub goal: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ProfileUpdate {
    pub nutrition_goals: NutritionGoals,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SigninRequest {
    pub email: String,
    pub password: String,
}

// --- response bodies ---

#[derive(Debug, Serialize, Deserialize)]
pub struct EntriesResponse {
    pub entries: Vec<FoodEntry>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FoodResponse {
    pub entry: FoodEntry,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SupplementsResponse {
    pub supplements: Vec<Supplement>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SupplementResponse {
    pub supplement: Supplement,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HydrationEntryResponse {
    pub entry: HydrationEntry,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SuccessResponse {
    pub success: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SignupResponse {
    pub user_id: String,
    pub email: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user_id: String,
}

// --- aggregated views ---

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NutritionTotals {
    pub calories: u64,
    pub protein: u64,
    pub carbs: u64,
    pub fat: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Completion {
    pub taken: usize,
    pub total: usize,
    pub rate: f64,
    pub is_complete: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct NutritionSummary {
    pub totals: NutritionTotals,
    pub goals: NutritionGoals,
    pub calorie_percent: f64,
    pub protein_percent: f64,
    pub carb_percent: f64,
    pub fat_percent: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HydrationSummary {
    pub total: f64,
    pub goal: f64,
    pub percent: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SupplementGroup {
    pub time_of_day: String,
    pub supplements: Vec<Supplement>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub date: String,
    pub nutrition: NutritionSummary,
    pub supplements: Completion,
    pub supplement_groups: Vec<SupplementGroup>,
    pub hydration: HydrationSummary,
}
