use crate::engine::output::Output;
use crate::engine::request::{Correction, ItemQueryOutcome, SpotQueryOutcome};

pub const GATHER_COMMAND: &str = "채집";
pub const SPOT_COMMAND: &str = "거점";
pub const USAGE_COMMANDS: [&str; 2] = ["사용법", "도움말"];

pub fn render_usage(out: &mut Output, prefix: &str) {
    out.title("📖 사용법 - 채집 & 거점 검색");
    out.say(format!(
        "채집물 이름이나 거점 이름으로 아이온2 채집 정보를 검색할 수 있어요.\n\n\
         채집물 검색 예시\n\
         • {p}{g} 오드\n\
         • {p}{g} 오드, 안젤리카\n\
         → 입력한 채집물을 모두 가진 거점을 찾아줘요.",
        p = prefix,
        g = GATHER_COMMAND,
    ));
    out.field(
        "자동완성 / 오타 보정",
        "오리하 → 오리하르콘, 이그 → 이그드라실 처럼 앞부분만 써도 인식해요.\n\
         조금 틀려도 비슷한 채집물로 인식하고, 완전 다른 이름이면\n\
         '그런 채집물은 없는데..' 라고 알려줄게요.",
    );
    out.field(
        "거점 검색 예시",
        format!(
            "{p}{s} 엘룬강 늪지\n\
             {p}{s} 새벽의 레기온 기지\n\
             → 해당 거점에서 채집 가능한 채집물 목록을 보여줘요.",
            p = prefix,
            s = SPOT_COMMAND,
        ),
    );
    out.set_footer(format!(
        "언제든지 {p}{} 또는 {p}{}로 이 안내를 다시 볼 수 있어요.",
        USAGE_COMMANDS[0],
        USAGE_COMMANDS[1],
        p = prefix,
    ));
}

pub fn render_item_outcome(out: &mut Output, outcome: &ItemQueryOutcome, prefix: &str) {
    match outcome {
        ItemQueryOutcome::EmptyQuery => render_usage(out, prefix),

        ItemQueryOutcome::Unresolved(tokens) => {
            out.title(format!("🌿 {}", tokens.join(", ")));
            out.say("🤔 그런 채집물은 없는데..\n채집물 이름을 다시 확인해주세요!");
        }

        ItemQueryOutcome::Found {
            items,
            spots,
            corrections,
        } => {
            let single = items.len() == 1;
            out.title(format!("🌿 {}", items.join(" + ")));

            if spots.is_empty() {
                if single {
                    out.say("😢 해당 채집물이 있는 거점을 찾지 못했습니다.");
                } else {
                    out.say("😢 입력한 채집물을 모두 가진 거점은 없습니다.");
                }
            } else {
                if single {
                    out.say("채집물이 있는 거점은 아래와 같습니다!");
                } else {
                    out.say("모두 있는 거점은 아래와 같습니다!");
                }
                for spot in spots {
                    out.entry(format!("✨ {}", spot));
                }
            }

            if !corrections.is_empty() {
                out.set_footer(format!(
                    "입력한 이름을 이렇게 인식했어요: {}",
                    correction_list(corrections)
                ));
            }
        }
    }
}

pub fn render_spot_outcome(out: &mut Output, outcome: &SpotQueryOutcome) {
    match outcome {
        SpotQueryOutcome::NotFound(raw) => {
            out.title(format!("📍 {}", raw));
            out.say("🤔 그런 거점은 없는데..\n거점 이름을 다시 확인해주세요!");
        }

        SpotQueryOutcome::Found {
            spot,
            items,
            correction,
        } => {
            out.title(format!("📍 {}", spot));
            out.say("해당 거점에서 채집할 수 있는 채집물 목록입니다.");
            for item in items {
                out.entry(format!("🌿 {}", item));
            }

            if let Some(c) = correction {
                out.set_footer(format!(
                    "입력한 이름 '{}' 를(을) '{}' 로 인식했어요.",
                    c.from, c.to
                ));
            }
        }
    }
}

fn correction_list(corrections: &[Correction]) -> String {
    corrections
        .iter()
        .map(|c| format!("{} → {}", c.from, c.to))
        .collect::<Vec<String>>()
        .join(", ")
}
