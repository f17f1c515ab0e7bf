use crate::zone::ZoneName;

/// Which mini-game panel the presentation layer shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ActiveTest {
    #[default]
    Welcome,
    Cognitive,
    Cardiovascular,
    BodyComposition,
    Reaction,
    Stability,
}

impl ActiveTest {
    /// Entry point for ids arriving from the page; anything unknown shows the
    /// welcome view.
    pub fn from_id(id: &str) -> Self {
        id.parse::<ZoneName>()
            .map(ActiveTest::from)
            .unwrap_or(ActiveTest::Welcome)
    }

    /// DOM id of the panel section for this test.
    pub fn panel_id(self) -> &'static str {
        match self {
            ActiveTest::Welcome => "test-welcome",
            ActiveTest::Cognitive => "test-cognitive",
            ActiveTest::Cardiovascular => "test-cardiovascular",
            ActiveTest::BodyComposition => "test-body-composition",
            ActiveTest::Reaction => "test-reaction",
            ActiveTest::Stability => "test-stability",
        }
    }

    pub const ALL: [ActiveTest; 6] = [
        ActiveTest::Welcome,
        ActiveTest::Cognitive,
        ActiveTest::Cardiovascular,
        ActiveTest::BodyComposition,
        ActiveTest::Reaction,
        ActiveTest::Stability,
    ];
}

impl From<ZoneName> for ActiveTest {
    fn from(zone: ZoneName) -> Self {
        match zone {
            ZoneName::Head => ActiveTest::Cognitive,
            ZoneName::Chest => ActiveTest::Cardiovascular,
            ZoneName::Abdomen => ActiveTest::BodyComposition,
            ZoneName::LeftArm | ZoneName::RightArm => ActiveTest::Reaction,
            ZoneName::LeftLeg | ZoneName::RightLeg => ActiveTest::Stability,
        }
    }
}
