//! Built-in Risk of Rain 2 challenge and logbook tables.
//!
//! Challenge names, descriptions and achievement identifiers follow the
//! in-game challenge list. Logbook entries cover the item and equipment
//! entries that challenges unlock plus a selection of codex-only entries.

use super::ChallengeCategory::{Artifacts, Items, Misc, Skills, Skins, Survivors};
use super::Dlc::{Ac, Base, Sots, Sotv};
use super::LogbookCategory as Log;
use super::{Challenge, ChallengeCategory, Dlc, LogbookCategory, LogbookEntry};

struct BuiltinChallenge {
    id: &'static str,
    achievement: &'static str,
    unlocks: &'static [&'static str],
    category: ChallengeCategory,
    dlc: Dlc,
    name: &'static str,
    description: &'static str,
}

struct BuiltinLogbookEntry {
    id: &'static str,
    unlock: &'static str,
    pickup: Option<&'static str>,
    category: LogbookCategory,
    dlc: Dlc,
    name: &'static str,
}

#[rustfmt::skip]
const BUILTIN_CHALLENGES: &[BuiltinChallenge] = &[
    // Survivors
    BuiltinChallenge { id: "huntress-unlock", achievement: "RepeatFirstTeleporter", unlocks: &["Survivors.Huntress"], category: Survivors, dlc: Base, name: "Warrior", description: "Reach and complete the 3rd Teleporter event without dying." },
    BuiltinChallenge { id: "mult-unlock", achievement: "CompleteTeleporterWithoutInjury", unlocks: &["Survivors.Toolbot"], category: Survivors, dlc: Base, name: "Verified", description: "Complete the first Teleporter event without taking damage." },
    BuiltinChallenge { id: "engineer-unlock", achievement: "CompleteThreeStages", unlocks: &["Survivors.Engineer"], category: Survivors, dlc: Base, name: "Engineering Perfection", description: "Complete 30 stages." },
    BuiltinChallenge { id: "artificer-unlock", achievement: "FreeMage", unlocks: &["Survivors.Mage"], category: Survivors, dlc: Base, name: "Pause.", description: "Free the survivor suspended in time." },
    BuiltinChallenge { id: "mercenary-unlock", achievement: "CompleteTeleporterWithoutObtainingGold", unlocks: &["Survivors.Mercenary"], category: Survivors, dlc: Base, name: "True Respite", description: "Obliterate yourself at the Obelisk." },
    BuiltinChallenge { id: "rex-unlock", achievement: "RepairTurret", unlocks: &["Survivors.TreeBot"], category: Survivors, dlc: Base, name: "Power Plant", description: "Repair the broken robot with an Escape Pod's Fuel Array." },
    BuiltinChallenge { id: "loader-unlock", achievement: "ReachHighAltitude", unlocks: &["Survivors.Loader"], category: Survivors, dlc: Base, name: "Guidance Offline", description: "Defeat the Alloy Worship Unit." },
    BuiltinChallenge { id: "acrid-unlock", achievement: "ReleaseAcrid", unlocks: &["Survivors.Croco"], category: Survivors, dlc: Base, name: "...To Be Left Alone", description: "Stabilize the Cell in the Void Fields." },
    BuiltinChallenge { id: "captain-unlock", achievement: "DefeatMithrix", unlocks: &["Survivors.Captain"], category: Survivors, dlc: Base, name: "Completion", description: "Defeat the final boss." },
    BuiltinChallenge { id: "bandit-unlock", achievement: "BanditRescue", unlocks: &["Survivors.Bandit2"], category: Survivors, dlc: Base, name: "Showdown", description: "Find and rescue the survivor." },
    BuiltinChallenge { id: "voidfiend-unlock", achievement: "VoidSurvivorUnlock", unlocks: &["Survivors.VoidSurvivor"], category: Survivors, dlc: Sotv, name: "Dragged Below", description: "Escape the Planetarium or complete wave 50 in Simulacrum." },
    BuiltinChallenge { id: "chef-unlock", achievement: "ChefUnlock", unlocks: &["Survivors.Chef"], category: Survivors, dlc: Sots, name: "Mise En Place", description: "Offer a Bison Steak, Cautious Slug, and Infusion at the Reformed Altar." },
    BuiltinChallenge { id: "falseson-unlock", achievement: "FalseSonUnlock", unlocks: &["Survivors.FalseSon"], category: Survivors, dlc: Sots, name: "Fly Away", description: "Defeat the False Son while holding a Halcyon Seed." },
    BuiltinChallenge { id: "drifter-unlock", achievement: "DrifterUnlock", unlocks: &["Survivors.Drifter"], category: Survivors, dlc: Ac, name: "Lost In Transit", description: "Free the Drifter from her prison in Solutional Haunt." },

    // Skills
    BuiltinChallenge { id: "commando-frag", achievement: "CommandoKillOverload", unlocks: &["Skills.Commando.ThrowGrenade"], category: Skills, dlc: Base, name: "Commando: Rolling Thunder", description: "As Commando, land a killing blow with a slide." },
    BuiltinChallenge { id: "commando-phaseblast", achievement: "CommandoFastFirstStageClear", unlocks: &["Skills.Commando.FireShotgunBlast"], category: Skills, dlc: Base, name: "Commando: Godspeed", description: "As Commando, complete the first stage in under 5 minutes." },
    BuiltinChallenge { id: "huntress-flurry", achievement: "HuntressAllGlaiveBouncesKill", unlocks: &["Skills.Huntress.Flurry"], category: Skills, dlc: Base, name: "Huntress: Finishing Touch", description: "As Huntress, land a killing blow with every arrow in a single Flurry." },
    BuiltinChallenge { id: "huntress-ballista", achievement: "HuntressMaintainFullHealth", unlocks: &["Skills.Huntress.AimedArrow"], category: Skills, dlc: Base, name: "Huntress: One Shot, One Kill", description: "As Huntress, collect and carry 12 Crowbars at once." },
    BuiltinChallenge { id: "mult-powersaw", achievement: "ToolbotGuardTeleporter", unlocks: &["Skills.Toolbot.Buzzsaw"], category: Skills, dlc: Base, name: "MUL-T: Gotcha!", description: "As MUL-T, land the killing blow on an Imp Overlord with the Preon Accumulator." },
    BuiltinChallenge { id: "mult-scrap", achievement: "ToolbotKillBoss", unlocks: &["Skills.Toolbot.GrenadeLauncher"], category: Skills, dlc: Base, name: "MUL-T: Multitasking", description: "As MUL-T, have 10 or more stacks of Scrap Launcher hits." },
    BuiltinChallenge { id: "engineer-spidermine", achievement: "EngineerKillBossQuick", unlocks: &["Skills.Engineer.SpiderMine"], category: Skills, dlc: Base, name: "Engineer: Better With Friends", description: "As Engineer, recruit 12 minions at one time." },
    BuiltinChallenge { id: "engineer-harpoon", achievement: "EngineerManyTurrets", unlocks: &["Skills.Engineer.Harpoon"], category: Skills, dlc: Base, name: "Engineer: 100% Calculated", description: "As Engineer, defeat the teleporter boss in less than 5 seconds after it spawns." },
    BuiltinChallenge { id: "artificer-ion", achievement: "MageMultiKill", unlocks: &["Skills.Mage.IonSurge"], category: Skills, dlc: Base, name: "Artificer: Chunked!", description: "As Artificer, fully defeat the teleporter boss in 1 second." },
    BuiltinChallenge { id: "artificer-flamethrower", achievement: "MageFastBoss", unlocks: &["Skills.Mage.Flamethrower"], category: Skills, dlc: Base, name: "Artificer: Massacre", description: "As Artificer, perform a multikill of 20 enemies." },
    BuiltinChallenge { id: "mercenary-slicing", achievement: "MercenaryDontTouchGround", unlocks: &["Skills.Mercenary.FocusedAssault"], category: Skills, dlc: Base, name: "Mercenary: Ethereal", description: "As Mercenary, complete a Prismatic Trial without falling below 100% health." },
    BuiltinChallenge { id: "mercenary-eviscerate", achievement: "MercenaryNoHit", unlocks: &["Skills.Mercenary.EvisProject"], category: Skills, dlc: Base, name: "Mercenary: Flash of Blades", description: "As Mercenary, complete a Prismatic Trial without touching the ground." },
    BuiltinChallenge { id: "rex-bramble", achievement: "TreebotDunkBoss", unlocks: &["Skills.TreeBot.Fruit"], category: Skills, dlc: Base, name: "REX: Dunked", description: "As REX, kill a Clay Dunestrider on Abandoned Aqueduct by throwing it into a pit." },
    BuiltinChallenge { id: "rex-harvest", achievement: "TreebotLowHealthTeleporter", unlocks: &["Skills.TreeBot.FireFlower"], category: Skills, dlc: Base, name: "REX: Bushwhacked", description: "As REX, complete an entire teleporter event while yourelf." },
    BuiltinChallenge { id: "loader-spiked", achievement: "LoaderSpeedKill", unlocks: &["Skills.Loader.ZapFist"], category: Skills, dlc: Base, name: "Loader: Swing By", description: "As Loader, reach and complete the Celestial Portal in 25 minutes or less." },
    BuiltinChallenge { id: "loader-thunder", achievement: "LoaderBigSlam", unlocks: &["Skills.Loader.ThunderFist"], category: Skills, dlc: Base, name: "Loader: Earthshatter", description: "As Loader, land a Charged Gauntlet hit at 300mph or higher." },
    BuiltinChallenge { id: "acrid-ravenous", achievement: "CrocoBeatArenaFast", unlocks: &["Skills.Croco.ChainableLeap"], category: Skills, dlc: Base, name: "Acrid: Easy Prey", description: "As Acrid, kill a boss in 1 second." },
    BuiltinChallenge { id: "acrid-frenzied", achievement: "CrocoKillScav", unlocks: &["Skills.Croco.Slash"], category: Skills, dlc: Base, name: "Acrid: Bad Medicine", description: "As Acrid, land the final blow on a Scavenger." },
    BuiltinChallenge { id: "captain-diablo", achievement: "CaptainVisitPlanet", unlocks: &["Skills.Captain.Airstrike2"], category: Skills, dlc: Base, name: "Captain: Completion", description: "As Captain, beat the game." },
    BuiltinChallenge { id: "captain-oag", achievement: "CaptainVoidDeath", unlocks: &["Skills.Captain.CallSupply2"], category: Skills, dlc: Base, name: "Captain: Wanderlust", description: "As Captain, visit 10 different environments in a single run." },
    BuiltinChallenge { id: "bandit-desperado", achievement: "Bandit2KillFinalBoss", unlocks: &["Skills.Bandit2.SkullRevolver"], category: Skills, dlc: Base, name: "Bandit: B&E", description: "As Bandit, kill the final boss with 'Lights Out'." },
    BuiltinChallenge { id: "bandit-smokebomb", achievement: "Bandit2StackHemorrhage", unlocks: &["Skills.Bandit2.ThrowSmokebomb"], category: Skills, dlc: Base, name: "Bandit: Sadist", description: "As Bandit, kill a monster with 20 stacks of Hemorrhage." },
    BuiltinChallenge { id: "railgunner-polar", achievement: "RailgunnerClearGameMonsoon", unlocks: &["Skills.Railgunner.ScopeLight"], category: Skills, dlc: Sotv, name: "Railgunner: Marksman", description: "As Railgunner, beat the game or obliterate on Monsoon." },
    BuiltinChallenge { id: "railgunner-cryocharge", achievement: "RailgunnerElectricBoomerang", unlocks: &["Skills.Railgunner.FireElectricGrenade"], category: Skills, dlc: Sotv, name: "Railgunner: Tripwire", description: "As Railgunner, kill an enemy by detonating a mine." },

    // Mastery skins
    BuiltinChallenge { id: "voidfiend-mastery", achievement: "VoidSurvivorClearGameMonsoon", unlocks: &["Skins.VoidSurvivor.Alt1"], category: Skins, dlc: Sotv, name: "Void Fiend: Mastery", description: "As Void Fiend, beat the game or obliterate on Monsoon." },

    // Skills
    BuiltinChallenge { id: "seeker-spirit", achievement: "SeekerAirKill", unlocks: &["Skills.Seeker.SpiritOrb"], category: Skills, dlc: Sots, name: "Seeker: Elevation", description: "As Seeker, hit 3 airborne enemies with the third shot of your primary." },
    BuiltinChallenge { id: "chef-sear", achievement: "ChefBurnMithrix", unlocks: &["Skills.Chef.Sear2"], category: Skills, dlc: Sots, name: "CHEF: Seared to Perfection", description: "As CHEF, get 20 burn stacks on Mithrix with secondary and special." },
    BuiltinChallenge { id: "chef-roll", achievement: "ChefAirborneRoll", unlocks: &["Skills.Chef.Roll2"], category: Skills, dlc: Sots, name: "CHEF: Rolling In", description: "As CHEF, run over 5 airborne enemies while in the air." },
    BuiltinChallenge { id: "chef-glaze", achievement: "ChefBisonRecipe", unlocks: &["Skills.Chef.Glaze2"], category: Skills, dlc: Sots, name: "CHEF: Glazed and Braised", description: "As CHEF, oil and burn 10 bisons, then grab the recipe from their corpses." },
    BuiltinChallenge { id: "falseson-laser", achievement: "FalseSonLaserKill", unlocks: &["Skills.FalseSon.Laser2"], category: Skills, dlc: Sots, name: "False Son: Grand Finale", description: "As False Son, kill 15 enemies in a single use of your special." },
    BuiltinChallenge { id: "operator-recruit", achievement: "OperatorRecruitDrones", unlocks: &["Skills.Operator.Recruit2"], category: Skills, dlc: Ac, name: "Operator: Recruitment Drive", description: "As Operator, recruit 5 different drones." },
    BuiltinChallenge { id: "operator-airborne", achievement: "OperatorNoGround", unlocks: &["Skills.Operator.Launch2"], category: Skills, dlc: Ac, name: "Operator: Grounded", description: "As Operator, defeat the teleporter boss on Conduit Canyon without touching the ground." },
    BuiltinChallenge { id: "operator-lemurian", achievement: "OperatorLemurianAirborne", unlocks: &["Skills.Operator.Command2"], category: Skills, dlc: Ac, name: "Operator: Up and Away", description: "As Operator, keep an Elder Lemurian airborne for 10 seconds." },
    BuiltinChallenge { id: "drifter-mountain", achievement: "DrifterMountainBoss", unlocks: &["Skills.Drifter.Salvage2"], category: Skills, dlc: Ac, name: "Drifter: Mountain Climber", description: "As Drifter, defeat a boss from the Challenge of the Mountain using a Shrine of the Mountain." },

    // Mastery skins
    BuiltinChallenge { id: "commando-mastery", achievement: "CommandoClearGameMonsoon", unlocks: &["Skins.Commando.Alt1"], category: Skins, dlc: Base, name: "Commando: Mastery", description: "As Commando, beat the game or obliterate on Monsoon." },
    BuiltinChallenge { id: "huntress-mastery", achievement: "HuntressClearGameMonsoon", unlocks: &["Skins.Huntress.Alt1"], category: Skins, dlc: Base, name: "Huntress: Mastery", description: "As Huntress, beat the game or obliterate on Monsoon." },
    BuiltinChallenge { id: "mult-mastery", achievement: "ToolbotClearGameMonsoon", unlocks: &["Skins.Toolbot.Alt1"], category: Skins, dlc: Base, name: "MUL-T: Mastery", description: "As MUL-T, beat the game or obliterate on Monsoon." },
    BuiltinChallenge { id: "engineer-mastery", achievement: "EngineerClearGameMonsoon", unlocks: &["Skins.Engineer.Alt1"], category: Skins, dlc: Base, name: "Engineer: Mastery", description: "As Engineer, beat the game or obliterate on Monsoon." },
    BuiltinChallenge { id: "artificer-mastery", achievement: "MageClearGameMonsoon", unlocks: &["Skins.Mage.Alt1"], category: Skins, dlc: Base, name: "Artificer: Mastery", description: "As Artificer, beat the game or obliterate on Monsoon." },
    BuiltinChallenge { id: "mercenary-mastery", achievement: "MercenaryClearGameMonsoon", unlocks: &["Skins.Mercenary.Alt1"], category: Skins, dlc: Base, name: "Mercenary: Mastery", description: "As Mercenary, beat the game or obliterate on Monsoon." },
    BuiltinChallenge { id: "rex-mastery", achievement: "TreebotClearGameMonsoon", unlocks: &["Skins.TreeBot.Alt1"], category: Skins, dlc: Base, name: "REX: Mastery", description: "As REX, beat the game or obliterate on Monsoon." },
    BuiltinChallenge { id: "loader-mastery", achievement: "LoaderClearGameMonsoon", unlocks: &["Skins.Loader.Alt1"], category: Skins, dlc: Base, name: "Loader: Mastery", description: "As Loader, beat the game or obliterate on Monsoon." },
    BuiltinChallenge { id: "acrid-mastery", achievement: "CrocoClearGameMonsoon", unlocks: &["Skins.Croco.Alt1"], category: Skins, dlc: Base, name: "Acrid: Mastery", description: "As Acrid, beat the game or obliterate on Monsoon." },
    BuiltinChallenge { id: "captain-mastery", achievement: "CaptainClearGameMonsoon", unlocks: &["Skins.Captain.Alt1"], category: Skins, dlc: Base, name: "Captain: Mastery", description: "As Captain, beat the game or obliterate on Monsoon." },
    BuiltinChallenge { id: "bandit-mastery", achievement: "Bandit2ClearGameMonsoon", unlocks: &["Skins.Bandit2.Alt1"], category: Skins, dlc: Base, name: "Bandit: Mastery", description: "As Bandit, beat the game or obliterate on Monsoon." },
    BuiltinChallenge { id: "railgunner-mastery", achievement: "RailgunnerClearGameMonsoon", unlocks: &["Skins.Railgunner.Alt1"], category: Skins, dlc: Sotv, name: "Railgunner: Mastery", description: "As Railgunner, beat the game or obliterate on Monsoon." },
    BuiltinChallenge { id: "seeker-mastery", achievement: "SeekerClearGameMonsoon", unlocks: &["Skins.Seeker.Alt1"], category: Skins, dlc: Sots, name: "Seeker: Mastery", description: "As Seeker, beat the game or obliterate on Monsoon." },
    BuiltinChallenge { id: "chef-mastery", achievement: "ChefClearGameMonsoon", unlocks: &["Skins.Chef.Alt1"], category: Skins, dlc: Sots, name: "CHEF: Mastery", description: "As CHEF, beat the game or obliterate on Monsoon." },
    BuiltinChallenge { id: "falseson-mastery", achievement: "FalseSonClearGameMonsoon", unlocks: &["Skins.FalseSon.Alt1"], category: Skins, dlc: Sots, name: "False Son: Mastery", description: "As False Son, beat the game or obliterate on Monsoon." },
    BuiltinChallenge { id: "operator-mastery", achievement: "OperatorClearGameMonsoon", unlocks: &["Skins.Operator.Alt1"], category: Skins, dlc: Ac, name: "Operator: Mastery", description: "As Operator, beat the game or obliterate on Monsoon." },
    BuiltinChallenge { id: "drifter-mastery", achievement: "DrifterClearGameMonsoon", unlocks: &["Skins.Drifter.Alt1"], category: Skins, dlc: Ac, name: "Drifter: Mastery", description: "As Drifter, beat the game or obliterate on Monsoon." },

    // Artifacts
    BuiltinChallenge { id: "artifact-chaos", achievement: "ObtainArtifactChaos", unlocks: &["Artifacts.Chaos"], category: Artifacts, dlc: Base, name: "Trial of Chaos", description: "Complete the Trial of Chaos." },
    BuiltinChallenge { id: "artifact-command", achievement: "ObtainArtifactCommand", unlocks: &["Artifacts.Command"], category: Artifacts, dlc: Base, name: "Trial of Command", description: "Complete the Trial of Command." },
    BuiltinChallenge { id: "artifact-death", achievement: "ObtainArtifactDeath", unlocks: &["Artifacts.Death"], category: Artifacts, dlc: Base, name: "Trial of Death", description: "Complete the Trial of Death." },
    BuiltinChallenge { id: "artifact-dissonance", achievement: "ObtainArtifactDissonance", unlocks: &["Artifacts.Dissonance"], category: Artifacts, dlc: Base, name: "Trial of Dissonance", description: "Complete the Trial of Dissonance." },
    BuiltinChallenge { id: "artifact-enigma", achievement: "ObtainArtifactEnigma", unlocks: &["Artifacts.Enigma"], category: Artifacts, dlc: Base, name: "Trial of Enigma", description: "Complete the Trial of Enigma." },
    BuiltinChallenge { id: "artifact-evolution", achievement: "ObtainArtifactEvolution", unlocks: &["Artifacts.Evolution"], category: Artifacts, dlc: Base, name: "Trial of Evolution", description: "Complete the Trial of Evolution." },
    BuiltinChallenge { id: "artifact-frailty", achievement: "ObtainArtifactFrailty", unlocks: &["Artifacts.Frailty"], category: Artifacts, dlc: Base, name: "Trial of Frailty", description: "Complete the Trial of Frailty." },
    BuiltinChallenge { id: "artifact-glass", achievement: "ObtainArtifactGlass", unlocks: &["Artifacts.Glass"], category: Artifacts, dlc: Base, name: "Trial of Glass", description: "Complete the Trial of Glass." },
    BuiltinChallenge { id: "artifact-honor", achievement: "ObtainArtifactHonor", unlocks: &["Artifacts.Honor"], category: Artifacts, dlc: Base, name: "Trial of Honor", description: "Complete the Trial of Honor." },
    BuiltinChallenge { id: "artifact-kin", achievement: "ObtainArtifactKin", unlocks: &["Artifacts.Kin"], category: Artifacts, dlc: Base, name: "Trial of Kin", description: "Complete the Trial of Kin." },
    BuiltinChallenge { id: "artifact-metamorphosis", achievement: "ObtainArtifactMetamorphosis", unlocks: &["Artifacts.Metamorphosis"], category: Artifacts, dlc: Base, name: "Trial of Metamorphosis", description: "Complete the Trial of Metamorphosis." },
    BuiltinChallenge { id: "artifact-sacrifice", achievement: "ObtainArtifactSacrifice", unlocks: &["Artifacts.Sacrifice"], category: Artifacts, dlc: Base, name: "Trial of Sacrifice", description: "Complete the Trial of Sacrifice." },
    BuiltinChallenge { id: "artifact-soul", achievement: "ObtainArtifactSoul", unlocks: &["Artifacts.Soul"], category: Artifacts, dlc: Base, name: "Trial of Soul", description: "Complete the Trial of Soul." },
    BuiltinChallenge { id: "artifact-spite", achievement: "ObtainArtifactSpite", unlocks: &["Artifacts.Spite"], category: Artifacts, dlc: Base, name: "Trial of Spite", description: "Complete the Trial of Spite." },
    BuiltinChallenge { id: "artifact-swarms", achievement: "ObtainArtifactSwarms", unlocks: &["Artifacts.Swarms"], category: Artifacts, dlc: Base, name: "Trial of Swarms", description: "Complete the Trial of Swarms." },
    BuiltinChallenge { id: "artifact-vengeance", achievement: "ObtainArtifactVengeance", unlocks: &["Artifacts.Vengeance"], category: Artifacts, dlc: Base, name: "Trial of Vengeance", description: "Complete the Trial of Vengeance." },

    // Items
    BuiltinChallenge { id: "item-firework", achievement: "AttackSpeed", unlocks: &["Items.Firework"], category: Items, dlc: Base, name: "The Basics", description: "Reach +200% attack speed." },
    BuiltinChallenge { id: "item-stickybomb", achievement: "Complete30StagesCareer", unlocks: &["Items.StickyBomb"], category: Items, dlc: Base, name: "Advancement", description: "Complete a teleporter event." },
    BuiltinChallenge { id: "item-warbanner", achievement: "FindLockbox", unlocks: &["Items.WardOnLevel"], category: Items, dlc: Base, name: "Warm Welcome", description: "Open a rusted lockbox." },
    BuiltinChallenge { id: "item-guillotine", achievement: "HardEliteBoss", unlocks: &["Items.ExecuteLowHealthElite"], category: Items, dlc: Base, name: "Cut Down", description: "Deal 5000% damage in a single blow." },
    BuiltinChallenge { id: "item-berzerker", achievement: "CompleteMainEnding", unlocks: &["Items.WarCryOnMultiKill"], category: Items, dlc: Base, name: "Warmonger", description: "Complete the game 5 times." },
    BuiltinChallenge { id: "item-brilliantbehemoth", achievement: "KillElementalLemurians", unlocks: &["Items.Behemoth"], category: Items, dlc: Base, name: "Macho", description: "Deal 5000 damage in a single second." },
    BuiltinChallenge { id: "item-sentientmeathook", achievement: "Kill500ElitesDaily", unlocks: &["Items.BounceNearby"], category: Items, dlc: Base, name: "Slaughter", description: "Defeat 3000 enemies." },
    BuiltinChallenge { id: "item-beads", achievement: "CompleteLunar", unlocks: &["Items.LunarBadLuck"], category: Items, dlc: Base, name: "Completion: Lunar", description: "Achieve Lunar completion." },
    BuiltinChallenge { id: "item-voidneedle", achievement: "CompleteVoidFields", unlocks: &["Items.BleedOnHitVoid"], category: Items, dlc: Sotv, name: "Void Fields", description: "Complete the Void Fields." },

    // Equipment
    BuiltinChallenge { id: "equip-preon", achievement: "Obliterate", unlocks: &["Equipment.BFG"], category: Items, dlc: Base, name: "Obliteration", description: "Obliterate yourself at the Obelisk." },
    BuiltinChallenge { id: "equip-trophy", achievement: "KillBossScav", unlocks: &["Equipment.Trophy"], category: Items, dlc: Base, name: "Trophy Hunter", description: "Defeat the boss scavenger." },

    // Miscellaneous
    BuiltinChallenge { id: "misc-learning", achievement: "Die10Times", unlocks: &[], category: Misc, dlc: Base, name: "The Learning Process", description: "Die 10 times." },
    BuiltinChallenge { id: "misc-1000", achievement: "Kill1000Bosses", unlocks: &[], category: Misc, dlc: Base, name: "Deicide", description: "Defeat 1000 bosses." },
    BuiltinChallenge { id: "misc-looper", achievement: "LoopOnce", unlocks: &[], category: Misc, dlc: Base, name: "Looper", description: "Loop back to the first stage." },
];

// Item and equipment unlock tokens must match the challenge tokens above.
#[rustfmt::skip]
const BUILTIN_LOGBOOK: &[BuiltinLogbookEntry] = &[
    // Items
    BuiltinLogbookEntry { id: "item-syringe",               unlock: "Items.Syringe",               pickup: Some("ItemIndex.Syringe"),               category: Log::Items,     dlc: Base, name: "Soldier's Syringe" },
    BuiltinLogbookEntry { id: "item-hoof",                  unlock: "Items.Hoof",                  pickup: Some("ItemIndex.Hoof"),                  category: Log::Items,     dlc: Base, name: "Paul's Goat Hoof" },
    BuiltinLogbookEntry { id: "item-crowbar",               unlock: "Items.Crowbar",               pickup: Some("ItemIndex.Crowbar"),               category: Log::Items,     dlc: Base, name: "Crowbar" },
    BuiltinLogbookEntry { id: "item-firework",              unlock: "Items.Firework",              pickup: Some("ItemIndex.Firework"),              category: Log::Items,     dlc: Base, name: "Bundle of Fireworks" },
    BuiltinLogbookEntry { id: "item-stickybomb",            unlock: "Items.StickyBomb",            pickup: Some("ItemIndex.StickyBomb"),            category: Log::Items,     dlc: Base, name: "Sticky Bomb" },
    BuiltinLogbookEntry { id: "item-warbanner",             unlock: "Items.WardOnLevel",           pickup: Some("ItemIndex.WardOnLevel"),           category: Log::Items,     dlc: Base, name: "Warbanner" },
    BuiltinLogbookEntry { id: "item-guillotine",            unlock: "Items.ExecuteLowHealthElite", pickup: Some("ItemIndex.ExecuteLowHealthElite"), category: Log::Items,     dlc: Base, name: "Old Guillotine" },
    BuiltinLogbookEntry { id: "item-berzerker",             unlock: "Items.WarCryOnMultiKill",     pickup: Some("ItemIndex.WarCryOnMultiKill"),     category: Log::Items,     dlc: Base, name: "Berzerker's Pauldron" },
    BuiltinLogbookEntry { id: "item-clover",                unlock: "Items.Clover",                pickup: Some("ItemIndex.Clover"),                category: Log::Items,     dlc: Base, name: "57 Leaf Clover" },
    BuiltinLogbookEntry { id: "item-brilliantbehemoth",     unlock: "Items.Behemoth",              pickup: Some("ItemIndex.Behemoth"),              category: Log::Items,     dlc: Base, name: "Brilliant Behemoth" },
    BuiltinLogbookEntry { id: "item-sentientmeathook",      unlock: "Items.BounceNearby",          pickup: Some("ItemIndex.BounceNearby"),          category: Log::Items,     dlc: Base, name: "Sentient Meat Hook" },
    BuiltinLogbookEntry { id: "item-beads",                 unlock: "Items.LunarBadLuck",          pickup: Some("ItemIndex.LunarBadLuck"),          category: Log::Items,     dlc: Base, name: "Purity" },
    BuiltinLogbookEntry { id: "item-voidneedle",            unlock: "Items.BleedOnHitVoid",        pickup: Some("ItemIndex.BleedOnHitVoid"),        category: Log::Items,     dlc: Sotv, name: "Needletick" },

    // Equipment
    BuiltinLogbookEntry { id: "equip-preon",                unlock: "Equipment.BFG",               pickup: Some("EquipmentIndex.BFG"),              category: Log::Equipment, dlc: Base, name: "Preon Accumulator" },
    BuiltinLogbookEntry { id: "equip-trophy",               unlock: "Equipment.Trophy",            pickup: Some("EquipmentIndex.Trophy"),           category: Log::Equipment, dlc: Base, name: "Trophy Hunter's Tricorn" },
    BuiltinLogbookEntry { id: "equip-blackhole",            unlock: "Equipment.Blackhole",         pickup: Some("EquipmentIndex.Blackhole"),        category: Log::Equipment, dlc: Base, name: "Primordial Cube" },

    // Survivors
    BuiltinLogbookEntry { id: "survivor-commando",          unlock: "Logs.Survivors.Commando",     pickup: None,                                    category: Log::Survivors, dlc: Base, name: "Commando" },
    BuiltinLogbookEntry { id: "survivor-huntress",          unlock: "Logs.Survivors.Huntress",     pickup: None,                                    category: Log::Survivors, dlc: Base, name: "Huntress" },
    BuiltinLogbookEntry { id: "survivor-engineer",          unlock: "Logs.Survivors.Engi",         pickup: None,                                    category: Log::Survivors, dlc: Base, name: "Engineer" },
    BuiltinLogbookEntry { id: "survivor-voidfiend",         unlock: "Logs.Survivors.VoidSurvivor", pickup: None,                                    category: Log::Survivors, dlc: Sotv, name: "Void Fiend" },
    BuiltinLogbookEntry { id: "survivor-chef",              unlock: "Logs.Survivors.Chef",         pickup: None,                                    category: Log::Survivors, dlc: Sots, name: "CHEF" },

    // Monsters
    BuiltinLogbookEntry { id: "beetle",                     unlock: "Logs.BeetleBody.0",           pickup: None,                                    category: Log::Monsters,  dlc: Base, name: "Beetle" },
    BuiltinLogbookEntry { id: "beetle-guard",               unlock: "Logs.BeetleGuardBody.0",      pickup: None,                                    category: Log::Monsters,  dlc: Base, name: "Beetle Guard" },
    BuiltinLogbookEntry { id: "beetle-queen",               unlock: "Logs.BeetleQueen2Body.0",     pickup: None,                                    category: Log::Monsters,  dlc: Base, name: "Beetle Queen" },
    BuiltinLogbookEntry { id: "lemurian",                   unlock: "Logs.LemurianBody.0",         pickup: None,                                    category: Log::Monsters,  dlc: Base, name: "Lemurian" },
    BuiltinLogbookEntry { id: "wisp",                       unlock: "Logs.WispBody.0",             pickup: None,                                    category: Log::Monsters,  dlc: Base, name: "Lesser Wisp" },
    BuiltinLogbookEntry { id: "brother",                    unlock: "Logs.BrotherBody.0",          pickup: None,                                    category: Log::Monsters,  dlc: Base, name: "Mithrix" },
    BuiltinLogbookEntry { id: "gup",                        unlock: "Logs.GupBody.0",              pickup: None,                                    category: Log::Monsters,  dlc: Sotv, name: "Gup" },
    BuiltinLogbookEntry { id: "void-mega-crab",             unlock: "Logs.VoidRaidCrabBody.0",     pickup: None,                                    category: Log::Monsters,  dlc: Sotv, name: "Voidling" },

    // Environments
    BuiltinLogbookEntry { id: "golemplains",                unlock: "Logs.Stages.golemplains",     pickup: None,                                    category: Log::Environments, dlc: Base, name: "Titanic Plains" },
    BuiltinLogbookEntry { id: "blackbeach",                 unlock: "Logs.Stages.blackbeach",      pickup: None,                                    category: Log::Environments, dlc: Base, name: "Distant Roost" },
    BuiltinLogbookEntry { id: "goolake",                    unlock: "Logs.Stages.goolake",         pickup: None,                                    category: Log::Environments, dlc: Base, name: "Abandoned Aqueduct" },
    BuiltinLogbookEntry { id: "moon2",                      unlock: "Logs.Stages.moon2",           pickup: None,                                    category: Log::Environments, dlc: Base, name: "Commencement" },
    BuiltinLogbookEntry { id: "voidstage",                  unlock: "Logs.Stages.voidstage",       pickup: None,                                    category: Log::Environments, dlc: Sotv, name: "Void Locus" },
];

pub(super) fn challenges() -> Vec<Challenge> {
    BUILTIN_CHALLENGES
        .iter()
        .map(|c| Challenge {
            id: c.id.to_string(),
            name: c.name.to_string(),
            description: c.description.to_string(),
            achievement: c.achievement.to_string(),
            unlocks: c.unlocks.iter().map(|token| token.to_string()).collect(),
            category: c.category,
            dlc: c.dlc,
        })
        .collect()
}

pub(super) fn logbook_entries() -> Vec<LogbookEntry> {
    BUILTIN_LOGBOOK
        .iter()
        .map(|e| LogbookEntry {
            id: e.id.to_string(),
            name: e.name.to_string(),
            unlock_token: e.unlock.to_string(),
            pickup_token: e.pickup.map(str::to_string),
            category: e.category,
            dlc: e.dlc,
        })
        .collect()
}
