use crate::domain::ParticipantId;
use crate::engine::RandomSource;

/// Перемешать участников (равновероятно по всем перестановкам).
///
/// Исходный список не трогаем – возвращаем новый.
pub fn shuffle_participants<R: RandomSource>(
    participants: &[ParticipantId],
    rng: &mut R,
) -> Vec<ParticipantId> {
    let mut shuffled = participants.to_vec();
    rng.shuffle(&mut shuffled);
    shuffled
}

/// Разбить уже перемешанный список на пары 1+2, 3+4, ...
///
/// При нечётном количестве последний участник откладывается и получает bye.
pub fn pair_with_bye(
    ordered: &[ParticipantId],
) -> (Vec<(ParticipantId, ParticipantId)>, Option<ParticipantId>) {
    let (paired, bye) = if ordered.len() % 2 == 1 {
        let (rest, last) = ordered.split_at(ordered.len() - 1);
        (rest, last.first().copied())
    } else {
        (ordered, None)
    };

    let pairs = paired
        .chunks_exact(2)
        .map(|pair| (pair[0], pair[1]))
        .collect();

    (pairs, bye)
}
