//! English word list for mnemonic seed encoding (1626 entries, §4.4).
//!
//! Indices are positional: encoding/decoding relies on exact array order.

pub(crate) const WORD_COUNT: usize = 1626;

#[rustfmt::skip]
pub(crate) const WORDS: [&str; WORD_COUNT] = [
    "babfov", "babriz", "badpluk", "bagcri", "baktrek", "balher", "bastut", "batdeng",
    "bebvong", "befmond", "beg", "bend", "benfe", "bengsant", "benpla", "bentdrold",
    "bepglust", "bespok", "bessu", "besswuch", "betachver", "bib", "bidroch", "bidrung",
    "bifslor", "big", "bilcerd", "bilstach", "birju", "bladwhick", "blaggek", "blangfof",
    "blant", "blapje", "blebprold", "blegfes", "blemdich", "blendro", "blengfech", "blent",
    "bleshwut", "bleslist", "blevcef", "blezstush", "blifclup", "bligmor", "bligsund", "blild",
    "blildswim", "blimzent", "blin", "blishbord", "blissit", "blistsher", "blobswa", "blobtrer",
    "blolef", "blolswed", "blom", "blomspast", "blomwhond", "blong", "blozplep", "bluchju",
    "blucust", "bluld", "blupchim", "blustpip", "bluvlash", "bluz", "bock", "bofblut",
    "boglist", "bokwof", "bondwhor", "bongpru", "bontcrast", "bor", "borbront", "borchuf",
    "bra", "brafclif", "brajuch", "brakhist", "bral", "bralkep", "bran", "brashcroz",
    "bravven", "brazflord", "brazpol", "brebweng", "brechvul", "breffrud", "breha", "brengthat",
    "brentcron", "brepra", "brestdush", "brestpra", "brevprast", "bri", "brichgrus", "brickcev",
    "bridwhik", "brifmuch", "brikfrol", "brilbru", "brimwir", "brirclech", "brisspez", "brizsweg",
    "broflild", "bromgaz", "brondgrit", "brongsten", "brorhent", "brosclub", "broslug", "brossi",
    "brovde", "browhoz", "broz", "bruchbend", "brukmob", "brundthom", "brussham", "bubbli",
    "buchsaf", "buldplald", "bulfuf", "bulstint", "bum", "buntwhav", "bushblent", "bushjard",
    "bushwhav", "busshur", "bust", "buvsot", "caddach", "cadpam", "cagthidba", "cak",
    "caldflos", "caldzol", "cam", "cantik", "cas", "cashsind", "cast", "castkur",
    "cechcez", "ceckgup", "ceckprag", "ced", "cefdum", "cek", "ceng", "cengzaz",
    "centrerd", "ceptef", "cetbint", "cetdech", "chachcap", "chacrob", "changfest", "changvand",
    "chas", "chashwosh", "chastlu", "che", "cheg", "chegbras", "chent", "chetwhup",
    "chif", "chikgre", "chirchom", "chirslund", "chirwib", "chisfich", "chit", "chizprez",
    "chobord", "chod", "chof", "chofbla", "chojond", "choldspet", "chomind", "chos",
    "chostef", "chotclack", "chovkack", "chozkish", "chug", "chugthar", "chuld", "chunfrob",
    "chunt", "chuntjek", "chuntza", "chupnel", "chuprus", "chusfuch", "chuztra", "cickfip",
    "cid", "cig", "cik", "cildmesh", "ciscil", "cish", "cla", "clach",
    "cladthu", "clant", "clar", "clargu", "clashmin", "clashtob", "clatfrab", "clav",
    "cleck", "cleckding", "cleldflob", "clendhong", "clenspe", "clercraf", "clestpoz", "cletre",
    "clezclus", "clikthas", "cling", "clipvo", "clird", "clirdtrav", "clis", "clishtriz",
    "clobchund", "clockstod", "clodswech", "clofdick", "clogrash", "clokplav", "cloldlav", "clongplib",
    "clontwick", "clopfrak", "clorgost", "closhtrov", "closhwhep", "cluchi", "cluf", "clugpem",
    "cluldruz", "clumstish", "clurtre", "clushclaz", "cluzguv", "cobgif", "codwul", "condsosh",
    "conreng", "coplo", "coshprund", "cra", "crabfling", "craddit", "cradgot", "crafse",
    "cravgleg", "cre", "creb", "credord", "credrid", "cregslaf", "crem", "crep",
    "crepshef", "cribruv", "crichcrub", "crikdreck", "crispund", "critdrard", "cro", "croburd",
    "crockdrer", "crof", "crofrash", "croguk", "crokmaf", "crold", "cronggrim", "cronposh",
    "crop", "crordslek", "croscint", "crotthush", "crudchas", "crufglod", "cruftril", "cruljem",
    "crund", "crunkast", "crusgru", "cruvwhes", "cuckstag", "cuddib", "cude", "cumglant",
    "cunchiv", "cust", "dabup", "dacash", "dack", "dackclav", "daflet", "dalcrav",
    "dammaflar", "danacish", "dap", "dapunt", "dash", "dazwhas", "dechnuz", "dellost",
    "deng", "dengspust", "dengzo", "destfoz", "dethu", "dev", "didswel", "digcre",
    "dikkagwhe", "dimthub", "ding", "dintfrov", "dintswov", "dirdfront", "dirdrob", "discod",
    "distush", "ditlem", "divthech", "dob", "dobish", "dockspif", "doffrond", "dofnit",
    "dog", "dongplest", "dopplurd", "dordjap", "dra", "drabflol", "drachspe", "drakclent",
    "drampleb", "drangfrun", "dranstot", "drarfru", "drashblop", "drebpluv", "drechfre", "dredzin",
    "drel", "dreldvid", "dremfra", "dremtren", "drendrim", "drentfli", "dreprov", "drerd",
    "drerthap", "drescosra", "dresplind", "dresspol", "drick", "drickmef", "drifblast", "drikzik",
    "drim", "drindho", "drip", "drippli", "drird", "drivast", "dro", "drobpre",
    "drod", "drok", "drop", "drot", "drotbrek", "drozshab", "druch", "druddrird",
    "drudjil", "drufmim", "drufmond", "drukgruz", "drule", "drund", "drunfri", "druntop",
    "druntvick", "drur", "druv", "dubtrerd", "duchheg", "dudwusjos", "dufral", "dundvish",
    "duntrand", "dunttost", "dushvaf", "fack", "famlubgif", "fapront", "fechmich", "fed",
    "feg", "fegisna", "feksalwal", "fen", "fepcro", "ferd", "ferwhat", "feshblud",
    "fespil", "festvol", "fevdrack", "fezcush", "fickbri", "fifthech", "fig", "fipkok",
    "fishslost", "fisluvriz", "fit", "fitstung", "fizwint", "fla", "flack", "fladblesh",
    "flamgles", "flamispep", "flansot", "flast", "flechbant", "fledtrep", "flegclub", "flendstan",
    "flenfrof", "flep", "flerd", "fleshcack", "flest", "fli", "flild", "flildlob",
    "flinfal", "flist", "fliz", "flomcen", "flontbli", "flost", "flostsod", "flostvip",
    "flovkat", "flovziz", "floz", "flub", "fludrun", "flufroch", "fluftron", "flukslick",
    "flumruck", "flun", "flushblok", "fluvbar", "foblastod", "fogrig", "fokcloz", "fontwez",
    "for", "foshplat", "fot", "fozdock", "fra", "fradshus", "fragblep", "frak",
    "frard", "frash", "frashjop", "frastswem", "fre", "frebif", "frefmir", "freldtred",
    "frelplat", "frepdrud", "fres", "frev", "frevbist", "fridbleck", "frik", "frikdrast",
    "frinstul", "frintcev", "frird", "fris", "frishpim", "frivgush", "frizchu", "frockdib",
    "frof", "frogtil", "frok", "frol", "frolkend", "fromleck", "frorddrek", "froshdrin",
    "frovgild", "frufrap", "frugshoz", "fruldfov", "frung", "frurcro", "frurdfib", "frustchuk",
    "fubtu", "fuckfrud", "fug", "fugcluk", "fujiz", "fund", "fundglont", "fupte",
    "furblich", "furhod", "fushpri", "gack", "gadep", "gakjosh", "galdjom", "gantchun",
    "gar", "gascruk", "gat", "gechnek", "geck", "gegluv", "gehi", "genshiv",
    "gentdra", "gentfild", "gerwodwad", "gestwick", "gev", "gezgluk", "gich", "gidrend",
    "gildrez", "gindwhet", "ging", "ginger", "ginstov", "gitid", "givrivspa", "gla",
    "glag", "glagcrild", "glagmik", "glagstos", "glakfruk", "glal", "glamam", "glandcrog",
    "glardgrug", "glarkov", "glashlis", "glavsiv", "gleckben", "glemwhad", "glentshar", "glerd",
    "glerfler", "glerfu", "glevfril", "glez", "glib", "gligjong", "gligkis", "glipjin",
    "glivdrag", "glo", "glodche", "glof", "glonwher", "glor", "glos", "glov",
    "gluldgont", "glur", "glush", "glushcha", "glustfost", "gluzclam", "gobcron", "gochfet",
    "gockslob", "gold", "gongcling", "gonpluz", "gor", "gorjol", "goshlond", "gosspoch",
    "gostcrak", "gracrast", "grag", "grakdud", "grakshest", "gralag", "gramshe", "grap",
    "grarddrir", "grash", "grat", "gravtrund", "gre", "greck", "grecrent", "grelcrent",
    "grentrach", "gretswu", "gribrik", "gringco", "grish", "gritluld", "griwheg", "grofblok",
    "grofod", "grog", "groke", "grontda", "grordcrif", "grosh", "grospran", "grovaf",
    "grovse", "grudfuz", "gruf", "grulcor", "grungfom", "grupruck", "gruripzuk", "grurrod",
    "grusglab", "grustspip", "grutzuf", "gubcleg", "gudwush", "gushwhost", "gutzog", "hachprond",
    "halbo", "halddet", "haldster", "hamof", "hand", "handla", "hard", "harddreng",
    "harjivind", "hazfrong", "hazwhant", "hebbriv", "hecleb", "hekglit", "hendpeb", "heng",
    "hepfok", "herd", "hetmes", "hetzufik", "hev", "hewhucang", "hezhi", "higwhon",
    "hildlush", "himmird", "hinpent", "hiptrick", "histslur", "hiv", "hockstong", "hoftaltab",
    "hold", "holplek", "hom", "homgron", "hongjag", "hosge", "host", "hostflurd",
    "hud", "huggrek", "hugslad", "hul", "hulddar", "huldshev", "humno", "hungta",
    "hurbrond", "hurdnesh", "husach", "hushdrap", "hust", "hutkeg", "jachva", "jackden",
    "jafmuf", "jalsot", "jantfled", "janwist", "jar", "jasten", "jathab", "jeldfep",
    "jem", "jent", "jeshpeng", "jetgras", "jethi", "jevjig", "jevslo", "jichdes",
    "jickgril", "jifhind", "jikbi", "jil", "jirdblam", "jirprerd", "jockgla", "joldgesh",
    "joldslef", "jongbli", "joshglak", "jost", "jostaleng", "jubnur", "jubzif", "jucknip",
    "juckplez", "judhang", "judmuk", "juf", "junfrend", "juslurd", "justnont", "jut",
    "juvel", "juzdar", "kagli", "kajindgut", "kakflu", "kas", "kast", "kastslant",
    "kechrind", "keckplil", "kedchost", "keddut", "kefruch", "kegland", "kengfrig", "kerdsham",
    "kestkib", "kezwifnev", "kil", "kimzul", "kinbrid", "king", "kipbret", "kistglont",
    "kisthof", "kiwhip", "kof", "kokprung", "komfrung", "kontgruv", "konthuv", "koprus",
    "korbror", "korddruv", "kordturd", "koshsis", "kovbleng", "koz", "kubclus", "kubrech",
    "kubtris", "kuchswit", "kuld", "kuljen", "kungswas", "kupfil", "kush", "kusnend",
    "kuspich", "kusttruf", "kuswach", "kuvfliz", "kuzclod", "lagsoch", "lajuch", "laldblib",
    "larzand", "lastplep", "ledsost", "lemjot", "lendzub", "lepfled", "levjun", "lewul",
    "lib", "lichlich", "lildlish", "linslag", "lirdpru", "litjiz", "litkord", "lodtrint",
    "lol", "lolplat", "longcrap", "loptish", "lordrash", "lovtib", "lozukble", "luck",
    "ludspo", "luhald", "lundford", "lunfektre", "lupmesh", "lusglet", "lutlund", "lutwav",
    "mafgrosh", "mag", "magclent", "mal", "malthiz", "mamstot", "mandfed", "mantkech",
    "mechnu", "mekcri", "mekthuz", "meld", "melwhurd", "merdirmik", "mezjobra", "mezplush",
    "mezswov", "miktrol", "milblend", "mint", "mipdrob", "mippust", "mir", "mishkald",
    "mispred", "mizkal", "mochdum", "mofflug", "monpoz", "montfack", "mopfrib", "mordfrold",
    "moststif", "moz", "mozzu", "mubswick", "muk", "mulhifluv", "mung", "murdsock",
    "murdtha", "murpan", "muvwhin", "nab", "nack", "nadswug", "namplan", "nantjand",
    "nap", "napli", "nard", "nashtold", "nastslack", "natnaf", "nazthust", "neckbrord",
    "nehep", "neldcreg", "nemuld", "nendgrug", "nestspop", "netgra", "nevlis", "nid",
    "nifhi", "nigfrind", "nigtof", "nikpest", "nikte", "nirdgren", "nisflo", "niszet",
    "nobhong", "nog", "nokcad", "nokcheck", "nokwhan", "noldnan", "nondfip", "nop",
    "nor", "nudat", "nuglach", "nunchuck", "nur", "nurbles", "nusclag", "nushcel",
    "nushdird", "nusupmu", "nuzcheng", "pafcru", "paglok", "pald", "paldshach", "patcaf",
    "pechstif", "peclat", "pemshurd", "pendhand", "pendpeng", "pentcro", "perchat", "pesgur",
    "pestspent", "pibland", "pickhik", "pikwhond", "pilked", "pilspard", "pinhong", "pip",
    "pis", "pisthash", "pivspuv", "plachglek", "plackprof", "placktord", "plagglem", "plajaf",
    "plakblig", "plantdrev", "plardfon", "plastter", "plat", "plazcro", "plechclan", "pled",
    "pledsho", "plekgish", "plemfevam", "plesh", "pleslech", "pletpriv", "plezpluld", "plezrof",
    "pli", "plib", "plibbring", "plilwhit", "plishlus", "pliz", "plobcet", "plobkut",
    "plock", "ploldgliv", "plonprep", "plont", "plopwhuf", "plund", "plurspim", "plurwho",
    "plut", "pluv", "pluvcrerd", "pockplast", "pof", "pofig", "pokpla", "pomgi",
    "pondfust", "pondwab", "pongcrul", "ponto", "pottha", "povbluv", "povbrek", "povlok",
    "pozant", "prabling", "prabwhung", "prackjaf", "prak", "prald", "pramnech", "pramsher",
    "prang", "prardtab", "pre", "pred", "prekbush", "prerdthad", "pri", "prim",
    "primcrev", "prinfech", "pringprek", "prishspef", "pristgre", "pritan", "prizvut", "pro",
    "prokflosh", "prokplang", "prolwhen", "prondbed", "prop", "propcrend", "proplan", "pror",
    "proslim", "prostpack", "prosttal", "prozdrep", "prubreck", "prud", "prudafsar", "prulbok",
    "prulbrick", "prungsa", "prupfev", "prustob", "prustpird", "prut", "pruzcrish", "pud",
    "puf", "pug", "pugdoznop", "pukswosh", "puldchor", "puldzun", "pungind", "punliz",
    "put", "puvgrust", "puvstof", "rach", "rand", "rar", "rasthush", "razlerd",
    "refprind", "rek", "rendtang", "renttok", "repswal", "rertez", "rettird", "revstul",
    "rick", "riddon", "rildglunt", "rintcluz", "rirbrab", "rirsted", "ris", "rish",
    "rishpeld", "rivfush", "rizgald", "rod", "rol", "rolbrach", "rond", "rongblom",
    "rotpam", "rudpoch", "rufgesh", "rumgaf", "rumra", "ruprupzan", "rurpriv", "rustced",
    "rutbint", "ruthaglad", "ruvmevzo", "sahaf", "saksir", "salvor", "sanprif", "savculd",
    "sechgish", "sekclup", "sekmant", "sekplak", "sekvencol", "seldtrint", "semprem", "sentgrast",
    "sepcling", "sepip", "sepird", "serdjald", "seshrup", "sez", "shachcluf", "shaldbum",
    "sham", "shapspord", "shardtham", "shashwup", "she", "shedglok", "shedgo", "sheld",
    "shentso", "sherdve", "sheshich", "sheshmung", "shet", "shez", "shirdchev", "shisglir",
    "shist", "shivflo", "shiz", "shob", "shockgraf", "shod", "sholdwosh", "shorshuv",
    "shoshathu", "shub", "shuk", "shukswent", "shum", "shun", "shungblav", "shungpriv",
    "shush", "shushna", "shushnot", "shuvwhag", "shuzstam", "sickband", "sickgluf", "sildbov",
    "sildcast", "sildswush", "sipvab", "sishpik", "sist", "slabprush", "slach", "slachbrit",
    "slafspiz", "slaknird", "slamswa", "slang", "slanpruld", "slastcab", "slavblo", "sleld",
    "sleldgrog", "slend", "sler", "slest", "slestmon", "slevthe", "slez", "slezslib",
    "slezswig", "sli", "slibdud", "slich", "slicktong", "slil", "slimsaz", "slind",
    "slindmeb", "slip", "slistgand", "slo", "slobbrack", "slochfuld", "slofswig", "slolpos",
    "sloshswuf", "sluchopco", "sluchtand", "sluckmant", "sludfrem", "slug", "slujag", "slurdsis",
    "socalswom", "sochbrep", "sock", "sof", "sofjit", "solbrav", "solddroz", "sollep",
    "som", "somkes", "somseck", "sonblig", "sontslach", "sost", "spach", "spalbriv",
    "span", "spantnosh", "spapcag", "spavbrard", "spaz", "sped", "sperhach", "spesslant",
    "spetkud", "spicrant", "spidbran", "spildmong", "spimchan", "spinwel", "spirdger", "spish",
    "spistba", "spitdil", "spivso", "spochip", "spoded", "spont", "spopkuv", "spordthu",
    "spovsla", "spubthok", "spum", "spuptak", "sputet", "stab", "stagflas", "stajel",
    "stalpred", "stansluck", "star", "stastcro", "stavclesh", "stawep", "sted", "stegdrold",
    "stemwick", "sterdraz", "stertra", "stesh", "stestswik", "stidtrul", "stigaf", "stilben",
    "stint", "stintplab", "stofruk", "stolclent", "stomstuf", "stondmosh", "stongchus", "stosttif",
    "stub", "stukwur", "stukzud", "stuld", "stungleng", "stupslod", "stuz", "such",
    "suck", "sud", "sugrog", "suldso", "sun", "sundfra", "sung", "suntcla",
    "sur", "surdpind", "suv", "swabre", "swack", "swadblif", "swakplom", "swastprel",
    "swatbland", "sweddab", "swedpurd", "swedrish", "swegpror", "swennuck", "swentferd", "swepros",
    "swesclut", "sweshtard", "swest", "sweszund", "swev", "swevzem", "swi", "swibdun",
    "swidro", "swifwhad", "swig", "swildpop", "swin", "swishthud", "swivrust", "swiwudik",
    "swiz", "swo", "swock", "swolo", "swostchop", "swoz", "swu", "swub",
    "swunglack", "swuzjust", "tachzont", "tackswol", "taddi", "takjeld", "tanthuk", "tast",
    "taswach", "tav", "tavtrosh", "tegdrupku", "teldclep", "telkut", "tend", "tent",
    "tepprom", "ter", "teshko", "tesliz", "testswoch", "teswo", "tevost", "thafol",
    "thag", "thaldglot", "thang", "thashfuld", "thashpak", "thazfra", "the", "thepshil",
    "therd", "theswin", "thetkit", "thezcrube", "thezjap", "thichash", "thickpre", "thilzuta",
    "thim", "thimbuld", "third", "thislip", "thisthob", "thisttrer", "thockrin", "thodtrud",
    "thogtrund", "tholdsli", "tholshur", "thond", "thong", "thont", "thontziv", "thopcu",
    "thugnick", "thukcub", "thungfuck", "thut", "thuvbe", "tibrek", "tildgob", "tindfot",
    "tirrop", "tish", "tobdren", "tod", "tonflord", "tongfra", "toprek", "totfaggip",
    "tov", "tovfrot", "tovgraf", "tozfle", "trabclir", "traftruck", "tragshard", "trakag",
    "trandber", "transtib", "tras", "trazprung", "tre", "trebmof", "trecham", "trek",
    "trekjek", "treslild", "trevurd", "tricrim", "trikglash", "trilas", "trip", "triplok",
    "trir", "trirsped", "tristkurd", "triza", "trizang", "tro", "trochav", "trogswild",
    "troldsung", "troluch", "trom", "tronploz", "trozclish", "truck", "trum", "trundsa",
    "trupbard", "trutblot", "truznont", "truzshen", "tubum", "tukpat", "tumchent", "tumdund",
    "tumsond", "tustwhold", "tutrug", "vaf", "vangblap", "vegthind", "vek", "vest",
    "vestgird", "vesvespip", "vet", "vetgruv", "vez", "vickfaz", "vifgrist", "vigwaf",
    "vik", "vil", "vildprip", "vint", "vipas", "vipdef", "vivfad", "vock",
    "vofrat", "vondgrong", "vondpand", "vonheg", "vontbavar", "vorglaf", "voshflud", "vovsild",
    "vugzird", "vunt", "vurdrird", "vuztant", "wabjiv", "wachlild", "wacuckruv", "wag",
    "wagzus", "walstost", "walvek", "wamclep", "wand", "war", "was", "washda",
    "wasvosh", "watguck", "weca", "wech", "weclurand", "weflis", "wela", "weld",
    "weldfi", "wem", "wengsent", "wes", "wetvek", "wez", "whad", "whafsleg",
    "whakglach", "whalddoch", "whallug", "whaz", "whe", "whegrast", "wheldjet", "when",
    "whesfen", "whesfrit", "wheshband", "whi", "whib", "whidglop", "whidtird", "whig",
    "whishslaf", "whisrast", "whistwe", "whog", "whuchmild", "whug", "whupchol", "wigblom",
    "wikfrud", "wimprint", "wind", "wipcir", "wistlold", "wob", "wobdrist", "wobdror",
    "wochcrung", "wofbrish", "wokstok", "wond", "wondcrind", "worddint", "wostpo", "wosttre",
    "wot", "wov", "wubwhek", "wuchfreg", "wuchip", "wuklit", "wuldjang", "wumtrend",
    "wunflung", "wurdbot", "wushzo", "wusslun", "zang", "zapler", "zeb", "zefswi",
    "zeglust", "zent", "zepdruch", "zesh", "zickfreng", "zidsles", "zifgus", "zig",
    "zimplin", "zindwhurd", "zirnib", "zobfobci", "zodwuvsul", "zofkos", "zofstund", "zok",
    "zolgul", "zordluf", "zosthus", "zoz", "zozib", "zozrong", "zuchtar", "zun",
    "zur", "zuscrok",
];

