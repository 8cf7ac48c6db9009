/// The eight places a visit can take place in, as printed on the sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Location {
    UserHome,      // 이용자가정
    CaregiverHome, // 돌보미가정
    TherapyCenter, // 치료센터
    Escort,        // 이동동반
    DailyLiving,   // 일상생활
    Outing,        // 외출/산책
    SelfCare,      // 신변처리
    StudyPlay,     // 학습/놀이
}

impl Location {
    /// Every location, in checkbox order on the sheet.
    pub const ALL: [Location; 8] = [
        Location::UserHome,
        Location::CaregiverHome,
        Location::TherapyCenter,
        Location::Escort,
        Location::DailyLiving,
        Location::Outing,
        Location::SelfCare,
        Location::StudyPlay,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Location::UserHome => "이용자가정",
            Location::CaregiverHome => "돌보미가정",
            Location::TherapyCenter => "치료센터",
            Location::Escort => "이동동반",
            Location::DailyLiving => "일상생활",
            Location::Outing => "외출/산책",
            Location::SelfCare => "신변처리",
            Location::StudyPlay => "학습/놀이",
        }
    }

    /// Base index of the checkbox cell inside the first row slot.
    pub fn offset(&self) -> usize {
        match self {
            Location::UserHome => 18,
            Location::CaregiverHome => 22,
            Location::TherapyCenter => 24,
            Location::Escort => 26,
            Location::DailyLiving => 28,
            Location::Outing => 30,
            Location::SelfCare => 32,
            Location::StudyPlay => 34,
        }
    }

    /// Convert a sheet value → enum (surrounding blanks are ignored)
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim();
        Location::ALL.into_iter().find(|l| l.code() == code)
    }
}
